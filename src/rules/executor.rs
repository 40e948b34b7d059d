//! Single-rule evaluation

use serde_json::Value;

use crate::predicates::{PredicateRegistry, PredicateResult};

use super::options::RuleOptions;

/// Evaluates one named rule against one value.
///
/// Pure over the registry state: no side effects, no accumulation.
#[derive(Debug, Clone, Copy)]
pub struct RuleExecutor<'a> {
    registry: &'a PredicateRegistry,
}

impl<'a> RuleExecutor<'a> {
    pub fn new(registry: &'a PredicateRegistry) -> Self {
        Self { registry }
    }

    /// Runs `rule_name` with `value` as first argument followed by `options`.
    ///
    /// Returns whether the predicate result equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns `PredicateError::RuleNotFound` if no predicate is registered
    /// under `rule_name`.
    pub fn execute(
        &self,
        value: &Value,
        rule_name: &str,
        options: &[Value],
        expected: bool,
    ) -> PredicateResult<bool> {
        let predicate = self.registry.lookup(rule_name)?;
        Ok(predicate(value, options) == expected)
    }

    /// Runs a rule using raw rule-set options.
    pub fn execute_rule(
        &self,
        value: &Value,
        rule_name: &str,
        options: &RuleOptions,
    ) -> PredicateResult<bool> {
        self.execute(value, rule_name, options.args(), options.expected())
    }
}
