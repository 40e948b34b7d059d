//! Default settings catalog errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for settings catalog operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings catalog errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed settings catalog '{path}': {reason}")]
    Malformed { path: String, reason: String },

    #[error("Setting '{0}' is defined more than once")]
    DuplicateKey(String),

    #[error("Setting '{key}' references unregistered rule '{rule}'")]
    UnknownRule { key: String, rule: String },
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingsError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Attaches the catalog file path to a malformed-catalog error
    pub(crate) fn with_path(self, path: String) -> Self {
        match self {
            SettingsError::Malformed { reason, .. } => SettingsError::Malformed { path, reason },
            other => other,
        }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SettingsError::Io { .. } => "SETTINGS_IO",
            SettingsError::Malformed { .. } => "SETTINGS_MALFORMED",
            SettingsError::DuplicateKey(_) => "SETTINGS_DUPLICATE_KEY",
            SettingsError::UnknownRule { .. } => "SETTINGS_UNKNOWN_RULE",
        }
    }
}
