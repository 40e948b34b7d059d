//! Predicate registry errors
//!
//! A missing predicate is a rule-configuration fault, never a validation
//! failure. It is reported with `Fatal` severity so callers can tell bad rule
//! configuration apart from bad input.

use thiserror::Error;

/// Result type for predicate lookups
pub type PredicateResult<T> = Result<T, PredicateError>;

/// Predicate registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// No predicate is registered under the requested name
    #[error("RULE_NOT_FOUND: no validation rule registered as '{0}'")]
    RuleNotFound(String),
}

impl PredicateError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            PredicateError::RuleNotFound(_) => "RULE_NOT_FOUND",
        }
    }

    /// Returns the rule name involved
    pub fn rule_name(&self) -> &str {
        match self {
            PredicateError::RuleNotFound(name) => name,
        }
    }
}
