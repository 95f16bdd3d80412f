//! Session domain module.
//!
//! This module contains the reflection session models and the aggregate
//! records that outlive a single session.
//!
//! # Module Structure
//!
//! - `model`: The in-progress reflection (`Session`)
//! - `history`: Completed reflection records (`HistoryEntry`) and the
//!   per-user aggregate (`Profile`)

mod history;
mod model;

// Re-export public API
pub use history::{HistoryEntry, Profile};
pub use model::Session;
