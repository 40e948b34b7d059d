//! Validation error types
//!
//! Error codes:
//! - RULE_VALIDATION_FAILED (REJECT): one or more checks failed on the input
//! - RULE_NOT_FOUND (FATAL): a rule set names a predicate that is not registered

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::predicates::PredicateError;

/// Severity levels for validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input rejected, caller may correct and retry
    Reject,
    /// Rule configuration is broken, retrying the same input cannot help
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// A single failed check.
///
/// `attribute` is `<entityType>.<column>` for record validation and the bare
/// setting key for settings validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub attribute: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            attribute: attribute.into(),
        }
    }

    /// A named rule did not produce its expected outcome
    pub fn rule_failed(rule_name: &str, key: &str) -> Self {
        Self::new(
            format!("Settings validation ({}) failed for {}", rule_name, key),
            key,
        )
    }

    /// A non-nullable column holds null or an empty value
    pub fn blank(attribute: &str) -> Self {
        Self::new(format!("Value in [{}] cannot be blank.", attribute), attribute)
    }

    /// A column value is longer than its declared maximum
    pub fn too_long(attribute: &str, max_length: usize) -> Self {
        Self::new(
            format!(
                "Value in [{}] exceeds maximum length of {} characters.",
                attribute, max_length
            ),
            attribute,
        )
    }

    /// An integer column holds something that is not an integer
    pub fn not_integer(attribute: &str) -> Self {
        Self::new(format!("Value in [{}] is no valid integer.", attribute), attribute)
    }
}

/// Why a validation call did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Every failed check from one call, in evaluation order
    #[error("RULE_VALIDATION_FAILED: {} check(s) failed", .0.len())]
    Rejected(Vec<ValidationError>),

    /// The rule configuration references an unregistered predicate
    #[error(transparent)]
    RuleNotFound(#[from] PredicateError),
}

impl ValidationFailure {
    /// Returns the string code for this failure
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::Rejected(_) => "RULE_VALIDATION_FAILED",
            ValidationFailure::RuleNotFound(e) => e.code(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ValidationFailure::Rejected(_) => Severity::Reject,
            ValidationFailure::RuleNotFound(_) => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Returns the accumulated validation errors, empty for fatal failures
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationFailure::Rejected(errors) => errors,
            ValidationFailure::RuleNotFound(_) => &[],
        }
    }

    /// Consumes the failure, yielding the validation errors if it was a rejection
    pub fn into_errors(self) -> Option<Vec<ValidationError>> {
        match self {
            ValidationFailure::Rejected(errors) => Some(errors),
            ValidationFailure::RuleNotFound(_) => None,
        }
    }
}

/// Result of a validation call. Success carries no payload.
pub type ValidationOutcome = Result<(), ValidationFailure>;

/// Turns an accumulator into an outcome: empty means success.
pub(crate) fn finish(errors: Vec<ValidationError>) -> ValidationOutcome {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::Rejected(errors))
    }
}
