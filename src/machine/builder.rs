//! Builder for constructing state machines.

use crate::config::MachineConfig;
use crate::machine::error::MachineError;
use crate::machine::state_machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
#[derive(Debug, Default)]
pub struct MachineBuilder {
    config: Option<MachineConfig>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the state machine.
    /// Returns an error if no configuration was supplied.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        let config = self.config.ok_or_else(|| {
            MachineError::InvalidArgument(
                "Configuration not specified. Call .config(config) before .build()".to_string(),
            )
        })?;

        Ok(StateMachine::new(config))
    }
}
