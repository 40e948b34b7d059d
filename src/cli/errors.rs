//! CLI-specific error types
//!
//! A rejected input exits with status 1. Every other error exits with 2.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::schema::SchemaError;
use crate::settings::SettingsError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Schema files could not be loaded
    SchemaError,
    /// Settings catalog could not be loaded
    SettingsError,
    /// Input on stdin has the wrong shape
    InvalidInput,
    /// A rule set references an unregistered rule
    RuleConfig,
    /// Input failed validation
    Rejected,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "RULECHECK_CONFIG_ERROR",
            Self::IoError => "RULECHECK_IO_ERROR",
            Self::SchemaError => "RULECHECK_SCHEMA_ERROR",
            Self::SettingsError => "RULECHECK_SETTINGS_ERROR",
            Self::InvalidInput => "RULECHECK_INVALID_INPUT",
            Self::RuleConfig => "RULECHECK_RULE_CONFIG",
            Self::Rejected => "RULECHECK_REJECTED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    pub fn rule_config(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RuleConfig, msg)
    }

    /// Input failed `failures` checks
    pub fn rejected(failures: usize) -> Self {
        Self::new(
            CliErrorCode::Rejected,
            format!("{} validation check(s) failed", failures),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self.code {
            CliErrorCode::Rejected => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(CliErrorCode::ConfigError, e.to_string())
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::UnknownRule { .. } => Self::rule_config(e.to_string()),
            other => Self::new(CliErrorCode::SchemaError, other.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::UnknownRule { .. } => Self::rule_config(e.to_string()),
            other => Self::new(CliErrorCode::SettingsError, other.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
