//! Setting validation against default definitions

use super::types::{CanonicalSetting, DefaultSettingsCatalog};
use crate::predicates::PredicateRegistry;
use crate::rules::{RuleSetValidator, ValidationOutcome};

/// Validates setting values against the rules on their default definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingsValidator<'a> {
    rules: RuleSetValidator<'a>,
}

impl<'a> SettingsValidator<'a> {
    pub fn new(registry: &'a PredicateRegistry) -> Self {
        Self {
            rules: RuleSetValidator::new(registry),
        }
    }

    /// Validates one setting.
    ///
    /// A key missing from the catalog, or a default without `validations`,
    /// has nothing to check and succeeds. Failures carry the bare setting key
    /// as their attribute.
    pub fn validate_settings(
        &self,
        catalog: &DefaultSettingsCatalog,
        setting: &impl CanonicalSetting,
    ) -> ValidationOutcome {
        let values = setting.to_canonical();
        let Some(rules) = catalog.get(&values.key).and_then(|d| d.validations.as_ref()) else {
            tracing::trace!(key = %values.key, "no validations for setting");
            return Ok(());
        };
        self.rules.validate_rule_set(&values.value, &values.key, rules)
    }
}
