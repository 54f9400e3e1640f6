//! State machine driven by named events.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{History, MoodState};
use crate::machine::builder::MachineBuilder;
use crate::machine::error::{InvalidTarget, MachineError};
use tracing::{debug, trace};

/// State machine over the fixed [`MoodState`] set, with undo/redo history.
///
/// The machine always starts in [`MoodState::Normal`]; a configuration's
/// declared `initial` state is overwritten on construction.
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: MoodState,
    history: History,
}

impl StateMachine {
    /// Create a machine that owns `config`, starting in `normal`.
    pub fn new(mut config: MachineConfig) -> Self {
        let current = MoodState::Normal;
        config.initial = Some(current.name().to_string());
        debug!(states = config.states.len(), initial = %current, "state machine created");
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Build a machine from a JSON configuration document.
    ///
    /// A `null` document counts as a missing configuration.
    pub fn from_json(text: &str) -> Result<Self, MachineError> {
        let config: Option<MachineConfig> =
            serde_json::from_str(text).map_err(ConfigError::from)?;

        let mut builder = MachineBuilder::new();
        if let Some(config) = config {
            builder = builder.config(config);
        }
        builder.build()
    }

    /// Current state (pure)
    pub fn state(&self) -> MoodState {
        self.current
    }

    /// Configuration the machine was built from (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Undo/redo history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move to the state named `target`.
    ///
    /// Fails with [`MachineError::InvalidState`] and changes nothing when
    /// `target` is not an allowed state.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        let target = Self::allowed(target)?;
        self.change_to(target);
        Ok(())
    }

    /// Move to `target`, recording the current state for undo.
    pub fn change_to(&mut self, target: MoodState) {
        let previous = self.current;
        self.history.record(previous);
        self.current = target;
        debug!(from = %previous, to = %target, "state changed");
    }

    /// Apply the transition the current state defines for `event`.
    ///
    /// Pending redo entries are discarded even when the event cannot be
    /// applied.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        self.history.clear_redo();

        let target = match self.config.destination(self.current.name(), event) {
            Some(destination) => Self::allowed(destination),
            None => {
                debug!(from = %self.current, event, "no transition for event");
                Err(MachineError::InvalidState(InvalidTarget::Unresolved {
                    from: self.current,
                    event: event.to_string(),
                }))
            }
        }?;

        self.change_to(target);
        Ok(())
    }

    /// Return to `normal`. Recorded in history like any other change.
    pub fn reset(&mut self) {
        self.change_to(MoodState::Normal);
    }

    /// States reachable by name.
    ///
    /// With no event, every allowed state in order. With an event, the
    /// declared states that define a transition for it, in declaration
    /// order.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => MoodState::ALL.iter().map(|state| state.name()).collect(),
            Some(event) => self.config.states_handling(event),
        }
    }

    /// Step back to the previous state. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(self.current) {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Re-enter the most recently undone state. Returns `false` when there
    /// is nothing to redo.
    ///
    /// The state being left is not recorded for undo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(next) => {
                debug!(from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Forget all undo and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        trace!(
            undo = self.history.undo_depth(),
            redo = self.history.redo_depth(),
            "history cleared"
        );
        self.history.clear();
    }

    fn allowed(name: &str) -> Result<MoodState, MachineError> {
        name.parse::<MoodState>().map_err(|err| {
            debug!(target_state = name, "rejected state change");
            MachineError::InvalidState(err.into())
        })
    }
}
