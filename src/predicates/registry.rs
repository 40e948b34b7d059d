//! Predicate registry
//!
//! Maps rule names to predicates. The registry is built once during startup
//! (builtins plus any extensions) and then shared by reference with the
//! validators. Registration takes `&mut self`, so a registry that has been
//! lent out to a validator cannot be extended while validations run.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::builtin::register_builtins;
use super::errors::{PredicateError, PredicateResult};

/// A named boolean check over a value and positional options.
pub type Predicate = Arc<dyn Fn(&Value, &[Value]) -> bool + Send + Sync>;

/// Registry of validation predicates keyed by rule name
#[derive(Clone, Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every builtin predicate
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Register a predicate under `name`.
    ///
    /// An existing predicate with the same name is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&Value, &[Value]) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.predicates.insert(name.clone(), Arc::new(predicate)).is_some() {
            tracing::debug!(rule = %name, "validation rule replaced");
        }
        self
    }

    /// Look up a predicate by name
    pub fn lookup(&self, name: &str) -> PredicateResult<&Predicate> {
        self.predicates
            .get(name)
            .ok_or_else(|| PredicateError::RuleNotFound(name.to_string()))
    }

    /// Check if a predicate is registered
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
