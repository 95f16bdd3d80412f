//! Application configuration.
//!
//! Loaded from `~/.config/tend/config.toml` when present; every field has
//! a default so a missing file is not an error.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable knobs for the reflection flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum trimmed length for a reflection to be submitted
    #[serde(default = "default_min_input_len")]
    pub min_input_len: usize,
    /// Lower bound of the simulated processing delay, in milliseconds
    #[serde(default = "default_delay_min_ms")]
    pub delay_min_ms: u64,
    /// Upper bound of the simulated processing delay, in milliseconds
    #[serde(default = "default_delay_max_ms")]
    pub delay_max_ms: u64,
    /// Explorer URL template; `{id}` is replaced by the receipt identifier
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
}

fn default_min_input_len() -> usize {
    10
}

fn default_delay_min_ms() -> u64 {
    2000
}

fn default_delay_max_ms() -> u64 {
    2500
}

fn default_explorer_url() -> String {
    "https://scan.tend.example/tx/{id}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_input_len: default_min_input_len(),
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
            explorer_url: default_explorer_url(),
        }
    }
}

impl Config {
    /// Returns the default config file path (`~/.config/tend/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tend").join("config.toml"))
    }

    /// Loads configuration from the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error only when a file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_input_len, 10);
        assert_eq!(config.delay_min_ms, 2000);
        assert_eq!(config.delay_max_ms, 2500);
        assert!(config.explorer_url.contains("{id}"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "min_input_len = 5").unwrap();
        writeln!(file, "delay_min_ms = 10").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.min_input_len, 5);
        assert_eq!(config.delay_min_ms, 10);
        // Unspecified fields keep their defaults
        assert_eq!(config.delay_max_ms, 2500);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, crate::error::TendError::Io { .. }));
    }

    #[test]
    fn test_load_from_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "min_input_len = \"not a number\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TendError::Serialization { .. }
        ));
    }
}
