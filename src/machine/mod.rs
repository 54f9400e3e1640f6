//! The event-driven state machine.
//!
//! # Key Concepts
//!
//! - **Changes**: `change_state` moves to a named allowed state and records
//!   the state being left
//! - **Events**: `trigger` looks the destination up in the configuration
//!   and applies it as a change
//! - **History**: `undo` and `redo` walk the recorded changes

mod builder;
mod error;
mod state_machine;

pub use builder::MachineBuilder;
pub use error::{InvalidTarget, MachineError};
pub use state_machine::StateMachine;
