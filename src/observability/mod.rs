//! Observability subsystem
//!
//! Structured logging through `tracing`. Library code only emits events;
//! installing a subscriber is left to the binary via [`init_logging`].
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on validation outcomes
//! 3. Logs go to stderr, stdout is reserved for command responses

mod events;

pub use events::Event;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Parses a log level name. Accepts `trace`, `debug`, `info`, `warn`, `error`.
pub fn parse_level(level: &str) -> Option<tracing::Level> {
    tracing::Level::from_str(level).ok()
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides `level` when set. Calling this more than once is a
/// no-op after the first successful install.
pub fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(format = %format, level, "logging initialised");
    }
}
