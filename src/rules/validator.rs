//! Rule-set validation
//!
//! Every rule in a set is evaluated against the same value. Rules are
//! independent: all of them run, and every failure is reported.

use serde_json::Value;

use super::errors::{finish, ValidationError, ValidationFailure, ValidationOutcome};
use super::executor::RuleExecutor;
use super::options::RuleSet;
use crate::observability::Event;
use crate::predicates::PredicateRegistry;

/// Evaluates whole rule sets and aggregates failures.
#[derive(Debug, Clone, Copy)]
pub struct RuleSetValidator<'a> {
    executor: RuleExecutor<'a>,
}

impl<'a> RuleSetValidator<'a> {
    pub fn new(registry: &'a PredicateRegistry) -> Self {
        Self {
            executor: RuleExecutor::new(registry),
        }
    }

    pub fn executor(&self) -> RuleExecutor<'a> {
        self.executor
    }

    /// Validates `value` against every rule in `rules`.
    ///
    /// Failures carry `key` as their attribute. An empty rule set succeeds.
    ///
    /// # Errors
    ///
    /// - `ValidationFailure::Rejected` with every failed rule, in declaration order
    /// - `ValidationFailure::RuleNotFound` if a rule name is not registered
    pub fn validate_rule_set(
        &self,
        value: &Value,
        key: &str,
        rules: &RuleSet,
    ) -> ValidationOutcome {
        let mut errors = Vec::new();
        self.collect(value, key, rules, &mut errors)?;
        if !errors.is_empty() {
            tracing::info!(
                event = %Event::RuleSetRejected,
                key,
                failures = errors.len(),
                "rule set validation failed"
            );
        }
        finish(errors)
    }

    /// Appends failures for `rules` to an existing accumulator.
    ///
    /// Used by callers that aggregate across several rule sets in one call.
    pub(crate) fn collect(
        &self,
        value: &Value,
        key: &str,
        rules: &RuleSet,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFailure> {
        for (rule_name, options) in rules {
            let passed = self
                .executor
                .execute_rule(value, rule_name, options)
                .map_err(|e| {
                    tracing::error!(
                        event = %Event::RuleNotFound,
                        rule = %rule_name,
                        key,
                        "unregistered validation rule"
                    );
                    e
                })?;

            if !passed {
                tracing::debug!(rule = %rule_name, key, "rule failed");
                errors.push(ValidationError::rule_failed(rule_name, key));
            }
        }
        Ok(())
    }
}

/// Validates `value` against `rules` with a throwaway validator.
pub fn validate_rule_set(
    registry: &PredicateRegistry,
    value: &Value,
    key: &str,
    rules: &RuleSet,
) -> ValidationOutcome {
    RuleSetValidator::new(registry).validate_rule_set(value, key, rules)
}
