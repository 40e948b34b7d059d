//! Rule evaluation subsystem
//!
//! - `RuleExecutor` runs one named rule and compares against the expected outcome
//! - `RuleSetValidator` runs a whole rule set and aggregates failures
//!
//! Success carries no payload. Failure is either a rejection listing every
//! failed check or a fatal rule-configuration fault.

mod errors;
mod executor;
mod options;
mod validator;

pub(crate) use errors::finish;
pub use errors::{Severity, ValidationError, ValidationFailure, ValidationOutcome};
pub use executor::RuleExecutor;
pub use options::{RuleOptions, RuleSet};
pub use validator::{validate_rule_set, RuleSetValidator};
