//! Default settings catalog and setting records
//!
//! Catalog files come in two shapes. Flat:
//!
//! ```json
//! { "title": { "defaultValue": "Ghost", "validations": { "isLength": [0, 150] } } }
//! ```
//!
//! or grouped by category, as default-settings files usually are:
//!
//! ```json
//! {
//!   "blog": {
//!     "title": { "defaultValue": "Ghost" },
//!     "email": { "validations": { "isEmail": true } }
//!   }
//! }
//! ```
//!
//! Both flatten to the same key-indexed catalog.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{SettingsError, SettingsResult};
use crate::observability::Event;
use crate::predicates::PredicateRegistry;
use crate::rules::RuleSet;

/// Fields of a setting entry
const ENTRY_KEYS: [&str; 4] = ["defaultValue", "value", "validations", "type"];

/// Default definition of one setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultSetting {
    #[serde(rename = "defaultValue", alias = "value", default)]
    pub value: Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub setting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<RuleSet>,
}

/// Setting key to default definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultSettingsCatalog {
    settings: IndexMap<String, DefaultSetting>,
}

impl DefaultSettingsCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog file from disk.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        let catalog = Self::from_json_str(&content)
            .map_err(|e| e.with_path(path.display().to_string()))?;
        tracing::info!(
            event = %Event::SettingsLoaded,
            path = %path.display(),
            settings = catalog.len(),
            "default settings loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| SettingsError::malformed("<inline>", e.to_string()))?;
        Self::from_value(value)
    }

    /// Builds a catalog from a flat or grouped JSON object.
    pub fn from_value(value: Value) -> SettingsResult<Self> {
        let Value::Object(top) = value else {
            return Err(SettingsError::malformed("<inline>", "catalog must be a JSON object"));
        };

        let mut catalog = Self::new();
        for (name, entry) in top {
            match entry {
                Value::Object(group) if is_group(&group) => {
                    for (key, setting) in group {
                        catalog.insert(key, parse_entry(setting)?)?;
                    }
                }
                entry => catalog.insert(name, parse_entry(entry)?)?,
            }
        }
        Ok(catalog)
    }

    /// Adds a setting, rejecting duplicate keys.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        setting: DefaultSetting,
    ) -> SettingsResult<()> {
        let key = key.into();
        if self.settings.contains_key(&key) {
            return Err(SettingsError::DuplicateKey(key));
        }
        self.settings.insert(key, setting);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&DefaultSetting> {
        self.settings.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Checks that every rule named by any setting is registered.
    pub fn verify_rules(&self, registry: &PredicateRegistry) -> SettingsResult<()> {
        for (key, setting) in &self.settings {
            let Some(rules) = &setting.validations else {
                continue;
            };
            if let Some(rule) = rules.keys().find(|rule| !registry.contains(rule)) {
                return Err(SettingsError::UnknownRule {
                    key: key.clone(),
                    rule: rule.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Decides whether a top-level object is a group of settings.
///
/// A group is a non-empty object of objects. When some of its keys are also
/// entry field names, it is a group only if every child has the shape of an
/// entry and at least one child carries entry fields. Otherwise it is read as
/// a single entry, so `{ "defaultValue": {} }` stays an entry while
/// `{ "value": { "defaultValue": 5 } }` is a group holding a setting named
/// `value`.
fn is_group(object: &Map<String, Value>) -> bool {
    if object.is_empty() || !object.values().all(Value::is_object) {
        return false;
    }
    if !ENTRY_KEYS.iter().any(|key| object.contains_key(*key)) {
        return true;
    }
    object.values().all(is_entry_shaped) && object.values().any(has_entry_fields)
}

fn has_entry_fields(value: &Value) -> bool {
    value
        .as_object()
        .map_or(false, |o| ENTRY_KEYS.iter().any(|key| o.contains_key(*key)))
}

fn is_entry_shaped(value: &Value) -> bool {
    value
        .as_object()
        .map_or(false, |o| o.is_empty() || has_entry_fields(value))
}

fn parse_entry(entry: Value) -> SettingsResult<DefaultSetting> {
    serde_json::from_value(entry).map_err(|e| SettingsError::malformed("<inline>", e.to_string()))
}

/// Canonical key/value form of a setting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingValues {
    pub key: String,
    pub value: Value,
}

impl SettingValues {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A setting record that can expose its canonical key/value form.
pub trait CanonicalSetting {
    fn to_canonical(&self) -> SettingValues;
}

impl CanonicalSetting for SettingValues {
    fn to_canonical(&self) -> SettingValues {
        self.clone()
    }
}
