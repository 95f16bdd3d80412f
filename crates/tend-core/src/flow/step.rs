//! Step types for the reflection flow state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The enumerated screens of the guided reflection sequence.
///
/// Control flow is strictly linear: `Welcome` (optionally via
/// `Onboarding`) leads to `Input`, `Processing`, `Insight`,
/// `PathSelection`, and finally `Dashboard`. The only back-edge is
/// `Dashboard` to `Input` when the user starts a new reflection;
/// `Dashboard` is the steady state, not a terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Step {
    /// The landing screen shown once at startup.
    Welcome,
    /// Optional walkthrough of the four paths.
    Onboarding,
    /// The user is writing a reflection.
    Input,
    /// The simulated analysis delay is running; not cancellable.
    Processing,
    /// The generated insight is being shown.
    Insight,
    /// The user is choosing a path to file the reflection under.
    PathSelection,
    /// The completion screen with profile counters and history.
    Dashboard,
}

impl Step {
    /// Returns the display name of this step.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Onboarding => "Onboarding",
            Step::Input => "Input",
            Step::Processing => "Processing",
            Step::Insight => "Insight",
            Step::PathSelection => "PathSelection",
            Step::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
