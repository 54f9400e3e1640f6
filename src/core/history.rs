//! Undo/redo history of state changes.
//!
//! History is a pair of stacks, most recent entry last. Moving back pushes
//! onto the redo stack, but moving forward does NOT push back onto the undo
//! stack: a redone change cannot itself be undone.

use super::state::MoodState;

/// Linear undo/redo history.
///
/// # Example
///
/// ```rust
/// use moodset::core::{History, MoodState};
///
/// let mut history = History::new();
/// history.record(MoodState::Normal);
///
/// // Currently busy; step back to where we were.
/// assert_eq!(history.step_back(MoodState::Busy), Some(MoodState::Normal));
/// assert_eq!(history.step_forward(), Some(MoodState::Busy));
///
/// assert!(!history.can_undo());
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<MoodState>,
    redo: Vec<MoodState>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the machine is leaving `previous`.
    ///
    /// Any pending redo entries are discarded.
    pub fn record(&mut self, previous: MoodState) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Pop the most recent undo entry, remembering `current` for redo.
    ///
    /// Returns `None` and leaves both stacks alone when there is nothing to
    /// undo.
    pub fn step_back(&mut self, current: MoodState) -> Option<MoodState> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pop the most recent redo entry.
    pub fn step_forward(&mut self) -> Option<MoodState> {
        self.redo.pop()
    }

    /// Discard pending redo entries only.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    /// Discard both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// States that `undo` would return to, oldest first.
    pub fn undo_states(&self) -> &[MoodState] {
        &self.undo
    }

    /// States that `redo` would return to, oldest first.
    pub fn redo_states(&self) -> &[MoodState] {
        &self.redo
    }
}
