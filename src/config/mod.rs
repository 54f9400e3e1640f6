//! Declarative machine configuration.
//!
//! A configuration maps state identifiers to their event transitions:
//!
//! ```json
//! {
//!   "states": {
//!     "normal": { "transitions": { "work": "busy" } },
//!     "busy":   { "transitions": { "rest": "normal" } }
//!   }
//! }
//! ```
//!
//! Declaration order of both states and events is preserved. The
//! configuration is not checked for internal consistency: destinations may
//! name states that are never declared, or that the machine will not enter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub mod error;

pub use error::ConfigError;

/// Transitions out of a single state, keyed by event identifier.
///
/// A `null` destination is kept but treated as no destination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub transitions: IndexMap<String, Option<String>>,
}

impl StateDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken on `event`.
    pub fn on(mut self, event: impl Into<String>, destination: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), Some(destination.into()));
        self
    }

    /// Destination for `event`, if this state defines one.
    pub fn destination(&self, event: &str) -> Option<&str> {
        self.transitions.get(event)?.as_deref()
    }
}

/// Machine configuration.
///
/// # Example
///
/// ```rust
/// use moodset::config::{MachineConfig, StateDefinition};
///
/// let config = MachineConfig::new()
///     .state("normal", StateDefinition::new().on("work", "busy"))
///     .state("busy", StateDefinition::new().on("rest", "normal"));
///
/// assert_eq!(config.destination("normal", "work"), Some("busy"));
/// assert_eq!(config.destination("busy", "work"), None);
/// assert_eq!(config.destination("sleeping", "work"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Declared starting state. Overwritten with `normal` once a machine
    /// takes ownership of the configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,

    #[serde(default)]
    pub states: IndexMap<String, StateDefinition>,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. Redeclaring a state replaces its transitions but
    /// keeps its original position.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a configuration from a JSON source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json(&text)
    }

    /// Destination reached from `state` on `event`.
    ///
    /// `None` when the state is not declared, declares no such event, or
    /// maps the event to `null`.
    pub fn destination(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state)?.destination(event)
    }

    /// Declared states that define a transition for `event`, in declaration
    /// order.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, definition)| definition.destination(event).is_some())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
