//! Record validation against entity schemas
//!
//! For each column declared for the entity type, in declaration order:
//!
//! 1. Blank check: runs only when the record has the key and the column
//!    declares `nullable: false`. A null or empty value is reported blank.
//!    An absent key is not checked unless `strict_presence` is enabled.
//! 2. Value checks: run only when the value is truthy.
//!    - `maxlength`: string length must not exceed the limit
//!    - `validations`: the column's rule set, keyed `<entityType>.<column>`
//!    - `type: integer`: the value must pass `isInt`
//!
//! The two groups are independent gates. Columns the schema does not declare
//! are ignored. All failures across all columns are reported together.

use serde_json::{json, Value};

use super::loader::SchemaLoader;
use super::types::{is_truthy, ColumnSpec, Record};
use crate::observability::Event;
use crate::predicates::PredicateRegistry;
use crate::rules::{finish, RuleSetValidator, ValidationError, ValidationFailure, ValidationOutcome};

/// Behaviour switches for record validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaValidatorOptions {
    /// Report non-nullable columns whose key is absent from the record
    pub strict_presence: bool,
}

/// Validates records against the schemas held by a loader.
///
/// Validator does not mutate records.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    loader: &'a SchemaLoader,
    rules: RuleSetValidator<'a>,
    options: SchemaValidatorOptions,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator backed by the given loader and predicates.
    pub fn new(loader: &'a SchemaLoader, registry: &'a PredicateRegistry) -> Self {
        Self {
            loader,
            rules: RuleSetValidator::new(registry),
            options: SchemaValidatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SchemaValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Validates a record against every column declared for `entity_type`.
    ///
    /// An entity type with no declared columns has nothing to check and
    /// succeeds.
    ///
    /// # Errors
    ///
    /// - `ValidationFailure::Rejected` with every failed check, in column order
    /// - `ValidationFailure::RuleNotFound` if a column or builtin check names
    ///   an unregistered predicate
    pub fn validate_schema(&self, entity_type: &str, record: &Record) -> ValidationOutcome {
        let Some(table) = self.loader.get(entity_type) else {
            tracing::warn!(
                event = %Event::UnknownEntityType,
                entity_type,
                "no schema declared, nothing to validate"
            );
            return Ok(());
        };

        let mut errors = Vec::new();
        for (column, spec) in table {
            let attribute = format!("{}.{}", entity_type, column);
            self.validate_column(&attribute, spec, record.get(column), &mut errors)?;
        }

        if !errors.is_empty() {
            tracing::info!(
                event = %Event::RecordRejected,
                entity_type,
                failures = errors.len(),
                "record validation failed"
            );
        }
        finish(errors)
    }

    fn validate_column(
        &self,
        attribute: &str,
        spec: &ColumnSpec,
        value: Option<&Value>,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFailure> {
        let executor = self.rules.executor();

        if spec.rejects_blank() {
            let blank = match value {
                Some(v) => {
                    executor.execute(v, "isNull", &[], true)?
                        || executor.execute(v, "empty", &[], true)?
                }
                None => self.options.strict_presence,
            };
            if blank {
                errors.push(ValidationError::blank(attribute));
            }
        }

        let Some(value) = value.filter(|v| is_truthy(v)) else {
            return Ok(());
        };

        if let Some(maxlength) = spec.maxlength {
            if !executor.execute(value, "isLength", &[json!(0), json!(maxlength)], true)? {
                errors.push(ValidationError::too_long(attribute, maxlength));
            }
        }

        if let Some(rules) = &spec.validations {
            self.rules.collect(value, attribute, rules, errors)?;
        }

        if spec.is_integer() && !executor.execute(value, "isInt", &[], true)? {
            errors.push(ValidationError::not_integer(attribute));
        }

        Ok(())
    }
}
