//! Schema type definitions
//!
//! A schema maps entity types to their columns. Columns keep declaration
//! order, which is also the order errors are reported in.
//!
//! ```json
//! {
//!   "posts": {
//!     "id":    { "type": "increments", "nullable": false, "primary": true },
//!     "title": { "type": "string", "maxlength": 150, "nullable": false },
//!     "slug":  { "type": "string", "maxlength": 150, "validations": { "notContains": "/" } }
//!   }
//! }
//! ```
//!
//! Column keys other than `nullable`, `maxlength`, `type` and `validations`
//! belong to the storage layer and are ignored here.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rules::RuleSet;

/// A candidate record: column name to value. Absent keys are distinct from
/// present-but-empty values.
pub type Record = Map<String, Value>;

/// Columns of one entity type, in declaration order.
pub type TableSchema = IndexMap<String, ColumnSpec>;

/// Declared storage type of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Increments,
    String,
    Text,
    Integer,
    Bool,
    DateTime,
    /// Any type name without a dedicated check
    Other(String),
}

impl ColumnType {
    /// Returns the type name as written in schema files
    pub fn type_name(&self) -> &str {
        match self {
            ColumnType::Increments => "increments",
            ColumnType::String => "string",
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Bool => "bool",
            ColumnType::DateTime => "dateTime",
            ColumnType::Other(name) => name,
        }
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "increments" => ColumnType::Increments,
            "string" => ColumnType::String,
            "text" => ColumnType::Text,
            "integer" => ColumnType::Integer,
            "bool" => ColumnType::Bool,
            "dateTime" => ColumnType::DateTime,
            _ => ColumnType::Other(name),
        }
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.type_name().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Constraints declared for one column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Absent or `true` disables the blank check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Maximum length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<usize>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    /// Named rules applied to truthy values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<RuleSet>,
}

impl ColumnSpec {
    /// Create a column with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column of the given type
    pub fn of_type(column_type: ColumnType) -> Self {
        Self {
            column_type: Some(column_type),
            ..Self::default()
        }
    }

    /// Create a non-nullable string column with a length limit
    pub fn required_string(maxlength: usize) -> Self {
        Self::of_type(ColumnType::String).nullable(false).max_length(maxlength)
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn max_length(mut self, maxlength: usize) -> Self {
        self.maxlength = Some(maxlength);
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.validations = Some(rules);
        self
    }

    /// Whether the blank check applies: `nullable` declared and not `true`
    pub fn rejects_blank(&self) -> bool {
        self.nullable == Some(false)
    }

    pub fn is_integer(&self) -> bool {
        self.column_type == Some(ColumnType::Integer)
    }
}

/// JavaScript-style truthiness used to gate per-value checks.
///
/// `null`, `false`, `0`, and `""` are falsy. Arrays and objects are
/// truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOptions;
    use serde_json::json;

    #[test]
    fn test_column_spec_from_json() {
        let spec: ColumnSpec = serde_json::from_value(json!({
            "type": "string",
            "maxlength": 150,
            "nullable": false,
            "unique": true,
            "validations": { "isLength": [1, 150] }
        }))
        .unwrap();

        assert_eq!(spec.column_type, Some(ColumnType::String));
        assert_eq!(spec.maxlength, Some(150));
        assert!(spec.rejects_blank());
        let rules = spec.validations.unwrap();
        assert_eq!(rules["isLength"], RuleOptions::Args(vec![json!(1), json!(150)]));
    }

    #[test]
    fn test_nullable_semantics() {
        assert!(!ColumnSpec::new().rejects_blank());
        assert!(!ColumnSpec::new().nullable(true).rejects_blank());
        assert!(ColumnSpec::new().nullable(false).rejects_blank());
    }

    #[test]
    fn test_column_type_names() {
        assert_eq!(ColumnType::from("dateTime".to_string()), ColumnType::DateTime);
        assert_eq!(ColumnType::from("integer".to_string()), ColumnType::Integer);
        assert_eq!(
            ColumnType::from("json".to_string()),
            ColumnType::Other("json".into())
        );
        assert_eq!(ColumnType::DateTime.to_string(), "dateTime");
        assert!(ColumnSpec::of_type(ColumnType::Integer).is_integer());
    }

    #[test]
    fn test_table_keeps_column_order() {
        let table: TableSchema = serde_json::from_str(
            r#"{ "zeta": {}, "alpha": {"nullable": true}, "mid": {"type": "text"} }"#,
        )
        .unwrap();
        let names: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
