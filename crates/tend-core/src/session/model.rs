//! Session domain model.
//!
//! This module contains the core Session entity that represents
//! the reflection currently in progress.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// The in-progress reflection.
///
/// A session contains:
/// - The user's free-text reflection
/// - The category assigned by the classifier
/// - The generated insight sentence
/// - A fabricated receipt identifier and ethics report (mock boundary)
/// - The path the user ultimately chose (may differ from the assigned one)
///
/// A session is created empty, filled in by the processing step, and
/// cleared when the user starts a new reflection cycle. Exactly one
/// session is active at a time; it is owned by the flow controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The user's free-text reflection
    pub input: String,
    /// Category assigned by the classifier (set during processing)
    pub assigned: Option<Category>,
    /// Insight sentence produced for this reflection (set during processing)
    pub insight: Option<String>,
    /// Fabricated receipt identifier ("0x" + 64 hex chars)
    pub receipt_id: Option<String>,
    /// Fabricated ethics report sentence
    pub report: Option<String>,
    /// Path the user chose at the selection step
    pub chosen: Option<Category>,
}

impl Session {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when processing has produced both a category and an insight.
    pub fn is_processed(&self) -> bool {
        self.assigned.is_some() && self.insight.is_some()
    }

    /// Clears all fields, returning the session to its initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.input.is_empty());
        assert!(session.assigned.is_none());
        assert!(!session.is_processed());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut session = Session {
            input: "a long reflection".to_string(),
            assigned: Some(Category::Blue),
            insight: Some("An insight.".to_string()),
            receipt_id: Some("0xabc".to_string()),
            report: Some("A report.".to_string()),
            chosen: Some(Category::Green),
        };
        session.clear();
        assert_eq!(session, Session::default());
    }
}
