//! Error types for the Tend application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Tend application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TendError {
    /// Reflection text is too short to submit
    #[error("Reflection needs at least {min} characters (got {actual})")]
    InputTooShort { actual: usize, min: usize },

    /// A step transition that the flow does not allow
    #[error("Cannot {action} from the {from} step")]
    InvalidTransition { from: String, action: String },

    /// A category name that does not map to any of the four paths
    #[error("Unknown path: '{0}'")]
    UnknownCategory(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TendError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InputTooShort error
    pub fn input_too_short(actual: usize, min: usize) -> Self {
        Self::InputTooShort { actual, min }
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(from: impl Into<String>, action: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from: from.into(),
            action: action.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InputTooShort error
    pub fn is_input_too_short(&self) -> bool {
        matches!(self, Self::InputTooShort { .. })
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TendError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TendError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TendError>`.
pub type Result<T> = std::result::Result<T, TendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_short_display() {
        let err = TendError::input_too_short(4, 10);
        assert_eq!(
            err.to_string(),
            "Reflection needs at least 10 characters (got 4)"
        );
        assert!(err.is_input_too_short());
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = TendError::invalid_transition("Welcome", "confirm a path");
        assert!(err.to_string().contains("Welcome"));
        assert!(err.is_invalid_transition());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TendError = io_err.into();
        assert!(matches!(err, TendError::Io { .. }));
    }
}
