//! rulecheck - declarative validation rules for records and settings
//!
//! Rules are named predicates looked up in a [`PredicateRegistry`]. Rule sets
//! attach rules to schema columns and to default settings, and the validators
//! report every failed check together.

pub mod cli;
pub mod config;
pub mod observability;
pub mod predicates;
pub mod rules;
pub mod schema;
pub mod settings;

pub use predicates::PredicateRegistry;
pub use rules::{ValidationError, ValidationFailure, ValidationOutcome};
