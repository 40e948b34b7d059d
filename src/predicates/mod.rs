//! Predicate registry subsystem
//!
//! Named boolean checks that rule sets refer to by name. Ships a builtin set
//! and accepts extensions registered during startup.

mod builtin;
mod errors;
mod registry;

pub use errors::{PredicateError, PredicateResult};
pub use registry::{Predicate, PredicateRegistry};
