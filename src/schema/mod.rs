//! Schema validation subsystem
//!
//! Records are checked against per-entity-type column declarations before
//! they are persisted.
//!
//! # Design Principles
//!
//! - Schemas are allow-lists: undeclared columns are ignored
//! - Every failure in a record is reported, never just the first
//! - Validation is deterministic and does not mutate the record
//! - Unregistered rule names are configuration faults, not validation failures

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use types::{is_truthy, ColumnSpec, ColumnType, Record, TableSchema};
pub use validator::{SchemaValidator, SchemaValidatorOptions};
