//! Observable events
//!
//! Every log line emitted by the validators carries one of these names in its
//! `event` field.

use std::fmt;

/// Observable events in rulecheck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Startup
    /// Configuration loaded
    ConfigLoaded,
    /// Schema files loaded
    SchemasLoaded,
    /// Default settings catalog loaded
    SettingsLoaded,

    // Validation
    /// A record failed schema validation
    RecordRejected,
    /// A value failed its rule set
    RuleSetRejected,
    /// Schema validation asked for an entity type with no declared columns
    UnknownEntityType,
    /// A rule set names an unregistered predicate (FATAL)
    RuleNotFound,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::SettingsLoaded => "SETTINGS_LOADED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::RuleSetRejected => "RULE_SET_REJECTED",
            Event::UnknownEntityType => "UNKNOWN_ENTITY_TYPE",
            Event::RuleNotFound => "RULE_NOT_FOUND",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RuleNotFound)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
