//! Configuration file
//!
//! ```json
//! {
//!   "schema_dir": "./schemas",
//!   "settings_path": "./default-settings.json",
//!   "strict_presence": false,
//!   "log_level": "info",
//!   "log_format": "text"
//! }
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{parse_level, LogFormat};
use crate::schema::SchemaValidatorOptions;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory of schema files (required)
    pub schema_dir: PathBuf,

    /// Default settings catalog (optional, settings checks are skipped without it)
    #[serde(default)]
    pub settings_path: Option<PathBuf>,

    /// Report absent non-nullable columns as blank (default: false)
    #[serde(default)]
    pub strict_presence: bool,

    /// Log level (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (default: text)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.schema_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("schema_dir must not be empty".into()));
        }

        if parse_level(&self.log_level).is_none() {
            return Err(ConfigError::Invalid(format!(
                "Invalid log_level: '{}'. Must be one of trace, debug, info, warn, error.",
                self.log_level
            )));
        }

        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        if self.schema_dir.is_relative() {
            self.schema_dir = base.join(&self.schema_dir);
        }
        if let Some(settings) = self.settings_path.as_mut() {
            if settings.is_relative() {
                *settings = base.join(&*settings);
            }
        }
    }

    /// Record validation switches derived from this config
    pub fn schema_options(&self) -> SchemaValidatorOptions {
        SchemaValidatorOptions {
            strict_presence: self.strict_presence,
        }
    }
}
