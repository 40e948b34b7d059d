//! Settings Validation Tests
//!
//! A setting is checked against the rule set on its default definition:
//! - Keys without a default, or defaults without rules, always pass
//! - Failures carry the bare setting key
//! - Any type exposing a canonical form can be validated

use rulecheck::predicates::PredicateRegistry;
use rulecheck::rules::{ValidationError, ValidationFailure};
use rulecheck::settings::{
    CanonicalSetting, DefaultSettingsCatalog, SettingValues, SettingsValidator,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn catalog() -> DefaultSettingsCatalog {
    DefaultSettingsCatalog::from_json_str(
        r#"{
            "core": {
                "databaseVersion": { "defaultValue": "000" }
            },
            "blog": {
                "title": {
                    "defaultValue": "Ghost",
                    "validations": { "isNull": false, "isLength": [0, 150] }
                },
                "description": {
                    "defaultValue": "Just a blogging platform.",
                    "validations": { "isLength": [0, 200] }
                },
                "email": {
                    "defaultValue": "ghost@example.com",
                    "validations": { "isNull": false, "isEmail": true }
                },
                "postsPerPage": {
                    "defaultValue": "6",
                    "validations": { "isNull": false, "isInt": true }
                },
                "permalinks": { "defaultValue": "/:slug/", "validations": { "matches": "^/.*/$" } }
            }
        }"#,
    )
    .unwrap()
}

/// A stored setting row, as a persistence layer would hand it over
struct SettingRow {
    key: String,
    value: String,
    updated_by: u32,
}

impl CanonicalSetting for SettingRow {
    fn to_canonical(&self) -> SettingValues {
        SettingValues::new(self.key.clone(), Value::String(self.value.clone()))
    }
}

// =============================================================================
// Pass-through Tests
// =============================================================================

/// A value satisfying every rule completes with no payload.
#[test]
fn test_valid_setting_passes() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);

    let setting = SettingValues::new("postsPerPage", json!("10"));
    let outcome = validator.validate_settings(&catalog(), &setting);
    assert_eq!(outcome, Ok(()));
}

/// Unknown key and rule-less default both succeed.
#[test]
fn test_nothing_to_check() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);
    let catalog = catalog();

    assert!(validator
        .validate_settings(&catalog, &SettingValues::new("activeTheme", json!(null)))
        .is_ok());
    assert!(validator
        .validate_settings(&catalog, &SettingValues::new("databaseVersion", json!("")))
        .is_ok());
}

// =============================================================================
// Failure Tests
// =============================================================================

/// `isNull: false` against null: predicate says true, expected false.
#[test]
fn test_null_title_rejected() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);

    let errors = validator
        .validate_settings(&catalog(), &SettingValues::new("title", Value::Null))
        .unwrap_err()
        .into_errors()
        .unwrap();
    assert_eq!(errors, vec![ValidationError::rule_failed("isNull", "title")]);
}

/// Every failed rule is reported, in declaration order.
#[test]
fn test_all_rule_failures_reported() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);

    let errors = validator
        .validate_settings(&catalog(), &SettingValues::new("email", json!("")))
        .unwrap_err()
        .into_errors()
        .unwrap();
    assert_eq!(
        errors,
        vec![
            ValidationError::rule_failed("isNull", "email"),
            ValidationError::rule_failed("isEmail", "email"),
        ]
    );
}

/// Description limited to 200 characters.
#[test]
fn test_length_limit() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);
    let catalog = catalog();

    let fits = SettingValues::new("description", json!("a".repeat(200)));
    assert!(validator.validate_settings(&catalog, &fits).is_ok());

    let over = SettingValues::new("description", json!("a".repeat(201)));
    let failure = validator.validate_settings(&catalog, &over).unwrap_err();
    assert_eq!(failure.errors().len(), 1);
    assert_eq!(failure.errors()[0].attribute, "description");
}

/// Pattern rules use the catalog's regular expression.
#[test]
fn test_matches_rule() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);
    let catalog = catalog();

    assert!(validator
        .validate_settings(&catalog, &SettingValues::new("permalinks", json!("/:year/:slug/")))
        .is_ok());
    assert!(validator
        .validate_settings(&catalog, &SettingValues::new("permalinks", json!(":slug")))
        .is_err());
}

// =============================================================================
// Canonical Form Tests
// =============================================================================

/// Only the canonical key and value take part in validation.
#[test]
fn test_custom_canonical_setting() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);

    let row = SettingRow {
        key: "postsPerPage".into(),
        value: "many".into(),
        updated_by: 1,
    };
    assert_eq!(row.updated_by, 1);

    let errors = validator
        .validate_settings(&catalog(), &row)
        .unwrap_err()
        .into_errors()
        .unwrap();
    assert_eq!(errors, vec![ValidationError::rule_failed("isInt", "postsPerPage")]);
}

/// A catalog rule naming an unregistered predicate is fatal, not a rejection.
#[test]
fn test_unregistered_rule_is_fatal() {
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);
    let catalog = DefaultSettingsCatalog::from_value(json!({
        "logo": { "defaultValue": "", "validations": { "isImage": true } }
    }))
    .unwrap();

    let failure = validator
        .validate_settings(&catalog, &SettingValues::new("logo", json!("a.png")))
        .unwrap_err();
    assert!(matches!(failure, ValidationFailure::RuleNotFound(_)));
    assert!(catalog.verify_rules(&registry).is_err());
}

/// Catalog files load from disk in grouped form.
#[test]
fn test_catalog_from_disk() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("default-settings.json");
    fs::write(
        &path,
        r#"{
            "blog": {
                "title": { "defaultValue": "Ghost", "validations": { "isLength": [0, 5] } }
            }
        }"#,
    )
    .unwrap();

    let catalog = DefaultSettingsCatalog::load(&path).unwrap();
    let registry = PredicateRegistry::with_builtins();
    let validator = SettingsValidator::new(&registry);

    assert!(validator
        .validate_settings(&catalog, &SettingValues::new("title", json!("Ghost")))
        .is_ok());
    assert!(validator
        .validate_settings(&catalog, &SettingValues::new("title", json!("Ghost!")))
        .is_err());
}
