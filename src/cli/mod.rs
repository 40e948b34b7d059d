//! CLI module for rulecheck
//!
//! Provides command-line interface for:
//! - check-record: Validate a record against an entity schema
//! - check-setting: Validate a setting against its default definition
//! - verify: Load configuration and check rule references
//! - rules: List registered rule names

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_record, check_setting, rules, run, run_command, verify};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_ok, write_rejection, write_response};
