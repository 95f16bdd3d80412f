pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod fabricate;
pub mod flow;
pub mod insight;
pub mod session;

// Re-export common error type
pub use error::TendError;

pub use category::{Category, CategoryProfile};
pub use classify::Classifier;
pub use config::Config;
pub use flow::{FlowController, Step};
pub use insight::InsightGenerator;
pub use session::{HistoryEntry, Profile, Session};
