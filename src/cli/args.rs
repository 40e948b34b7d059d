//! CLI argument definitions using clap
//!
//! Commands:
//! - rulecheck check-record --config <path> --entity <type>
//! - rulecheck check-setting --config <path>
//! - rulecheck verify --config <path>
//! - rulecheck rules

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rulecheck - declarative validation for records and settings
#[derive(Parser, Debug)]
#[command(name = "rulecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON record from stdin against an entity schema
    CheckRecord {
        /// Path to configuration file
        #[arg(long, default_value = "./rulecheck.json")]
        config: PathBuf,

        /// Entity type whose schema applies
        #[arg(long)]
        entity: String,
    },

    /// Validate one `{key, value}` setting from stdin against the default settings catalog
    CheckSetting {
        /// Path to configuration file
        #[arg(long, default_value = "./rulecheck.json")]
        config: PathBuf,
    },

    /// Load schemas and settings and check every referenced rule exists
    Verify {
        /// Path to configuration file
        #[arg(long, default_value = "./rulecheck.json")]
        config: PathBuf,
    },

    /// List the registered validation rules
    Rules,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
