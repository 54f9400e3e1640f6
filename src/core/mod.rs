//! Core state machine types.
//!
//! This module contains the pieces the machine is assembled from:
//! - The fixed allowed-state enumeration
//! - Undo/redo history tracking
//!
//! Nothing here knows about configurations or events.

mod history;
mod state;

pub use history::History;
pub use state::{MoodState, UnknownState};
