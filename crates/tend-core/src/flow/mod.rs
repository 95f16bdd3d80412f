//! Reflection flow module.
//!
//! This module contains the step state machine that drives the guided
//! reflection sequence.
//!
//! # Module Structure
//!
//! - `step`: The enumerated screen steps (`Step`)
//! - `controller`: The flow controller owning all mutable state
//!   (`FlowController`)

mod controller;
mod step;

// Re-export public API
pub use controller::FlowController;
pub use step::Step;
