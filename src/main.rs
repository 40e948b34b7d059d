//! rulecheck CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors are
//! reported on stderr and mapped to the process exit status.

use rulecheck::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
