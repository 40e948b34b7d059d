//! Settings validation subsystem
//!
//! A setting's value is checked against the rule set attached to its default
//! definition in the catalog.

mod errors;
mod types;
mod validator;

pub use errors::{SettingsError, SettingsResult};
pub use types::{CanonicalSetting, DefaultSetting, DefaultSettingsCatalog, SettingValues};
pub use validator::SettingsValidator;
