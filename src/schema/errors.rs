//! Schema loading errors
//!
//! Error codes:
//! - SCHEMA_DIR_MISSING
//! - SCHEMA_IO
//! - SCHEMA_MALFORMED
//! - SCHEMA_DUPLICATE_ENTITY
//! - SCHEMA_UNKNOWN_RULE
//!
//! These are startup errors. Record validation failures are reported through
//! `ValidationFailure` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema loading errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema directory not found: {}", .0.display())]
    DirMissing(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed schema file '{path}': {reason}")]
    Malformed { path: String, reason: String },

    #[error("Entity type '{0}' is already defined")]
    DuplicateEntity(String),

    #[error("Column '{attribute}' references unregistered rule '{rule}'")]
    UnknownRule { attribute: String, rule: String },
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SchemaError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::DirMissing(_) => "SCHEMA_DIR_MISSING",
            SchemaError::Io { .. } => "SCHEMA_IO",
            SchemaError::Malformed { .. } => "SCHEMA_MALFORMED",
            SchemaError::DuplicateEntity(_) => "SCHEMA_DUPLICATE_ENTITY",
            SchemaError::UnknownRule { .. } => "SCHEMA_UNKNOWN_RULE",
        }
    }
}
