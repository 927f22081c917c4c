//! Configuration errors. Raised once, when rules are initialized.

use std::path::PathBuf;

use super::error_code::{self, ConformErrorCode};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid exclude pattern {pattern:?} for rule {rule}: {reason}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        reason: String,
    },

    #[error("Invalid minFiles for rule {rule}: {value} (must be at least 1)")]
    InvalidMinFiles { rule: String, value: usize },

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Unknown preset: {0} (expected \"recommended\" or \"strict\")")]
    UnknownPreset(String),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

impl ConformErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::CONFIG_INVALID_PATTERN,
            Self::InvalidMinFiles { .. } => error_code::CONFIG_INVALID_MIN_FILES,
            Self::Read { .. } => error_code::CONFIG_READ_ERROR,
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
            Self::UnknownPreset(_) => error_code::CONFIG_UNKNOWN_PRESET,
            Self::UnknownRule(_) => error_code::CONFIG_UNKNOWN_RULE,
        }
    }
}
