//! Rule set definitions
//!
//! A rule set maps rule names to options:
//!
//! ```json
//! { "isUrl": true, "isLength": [20, 40], "notContains": "ghost", "isNull": false }
//! ```
//!
//! - a boolean is the expected outcome, with no positional options
//! - an array is the positional options, expected outcome `true`
//! - any other scalar is a single positional option, expected outcome `true`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping of rule name to options.
pub type RuleSet = IndexMap<String, RuleOptions>;

/// Options attached to one rule in a rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum RuleOptions {
    /// Expected predicate result, no positional options
    Expect(bool),
    /// Positional options, predicate must return `true`
    Args(Vec<Value>),
}

impl RuleOptions {
    /// The result the predicate must produce for the rule to pass.
    pub fn expected(&self) -> bool {
        match self {
            RuleOptions::Expect(expected) => *expected,
            RuleOptions::Args(_) => true,
        }
    }

    /// Positional options passed after the value.
    pub fn args(&self) -> &[Value] {
        match self {
            RuleOptions::Expect(_) => &[],
            RuleOptions::Args(args) => args,
        }
    }
}

impl From<Value> for RuleOptions {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(expected) => RuleOptions::Expect(expected),
            Value::Array(args) => RuleOptions::Args(args),
            scalar => RuleOptions::Args(vec![scalar]),
        }
    }
}

impl From<RuleOptions> for Value {
    fn from(options: RuleOptions) -> Self {
        match options {
            RuleOptions::Expect(expected) => Value::Bool(expected),
            RuleOptions::Args(args) => Value::Array(args),
        }
    }
}

impl From<bool> for RuleOptions {
    fn from(expected: bool) -> Self {
        RuleOptions::Expect(expected)
    }
}
