//! Errors raised by state machine operations.

use crate::config::ConfigError;
use crate::core::{MoodState, UnknownState};
use thiserror::Error;

/// Why a requested target was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTarget {
    /// The name is not one of the allowed states
    #[error("'{0}' is not an allowed state")]
    Unknown(String),

    /// The current state has no transition for the event
    #[error("no transition for event '{event}' from state '{from}'")]
    Unresolved { from: MoodState, event: String },
}

impl From<UnknownState> for InvalidTarget {
    fn from(err: UnknownState) -> Self {
        Self::Unknown(err.0)
    }
}

/// Errors that can occur when building or driving a state machine.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(InvalidTarget),
}

impl From<ConfigError> for MachineError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_names_the_state() {
        let err = MachineError::InvalidState(InvalidTarget::Unknown("angry".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid state: 'angry' is not an allowed state"
        );
    }

    #[test]
    fn unresolved_target_names_state_and_event() {
        let err = MachineError::InvalidState(InvalidTarget::Unresolved {
            from: MoodState::Busy,
            event: "work".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid state: no transition for event 'work' from state 'busy'"
        );
    }

    #[test]
    fn unknown_state_converts_with_same_message() {
        let err = "Sleeping".parse::<MoodState>().unwrap_err();
        let message = err.to_string();

        let target = InvalidTarget::from(err);

        assert_eq!(target, InvalidTarget::Unknown("Sleeping".to_string()));
        assert_eq!(target.to_string(), message);
    }

    #[test]
    fn config_errors_become_invalid_argument() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MachineError::from(ConfigError::Parse(parse));
        assert!(matches!(err, MachineError::InvalidArgument(_)));
    }
}
