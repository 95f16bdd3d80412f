//! Completed reflection records and the per-user aggregate.

use crate::category::Category;
use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable record of a completed, confirmed reflection.
///
/// Entries are snapshots: once built from a session they are never
/// mutated or removed. The history list keeps them most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry identifier (UUID format)
    pub id: String,
    /// The reflection text as submitted
    pub input: String,
    /// The insight sentence shown for this reflection
    pub insight: String,
    /// The path the user chose
    pub chosen: Category,
    /// Fabricated receipt identifier carried over from the session
    pub receipt_id: Option<String>,
    /// Timestamp when the reflection was confirmed
    pub confirmed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds a snapshot from a processed session and the chosen path.
    pub fn from_session(session: &Session, chosen: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            input: session.input.clone(),
            insight: session.insight.clone().unwrap_or_default(),
            chosen,
            receipt_id: session.receipt_id.clone(),
            confirmed_at: Utc::now(),
        }
    }
}

/// Aggregate counters for the user, updated only by the completion step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Total number of confirmed reflections
    pub total_reflections: u32,
    /// Consecutive-day streak counter
    pub current_streak: u32,
    /// The most recently chosen path, if any reflection has completed
    pub last_chosen: Option<Category>,
    /// Every chosen path in confirmation order
    pub path_evolution: Vec<Category>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            total_reflections: 0,
            current_streak: 1,
            last_chosen: None,
            path_evolution: Vec::new(),
        }
    }
}

impl Profile {
    /// Creates a fresh profile with zero reflections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a confirmed path choice.
    pub fn record(&mut self, chosen: Category) {
        self.total_reflections += 1;
        self.last_chosen = Some(chosen);
        self.path_evolution.push(chosen);
    }
}
