//! Moodset: a small event-driven state machine with undo/redo history
//!
//! A machine is built from a declarative configuration of states and their
//! event transitions. It tracks a single current state drawn from a fixed
//! set (`normal`, `busy`, `hungry`, `sleeping`), applies transitions by
//! event name, and keeps a linear history of changes that can be undone and
//! redone.
//!
//! # Core Concepts
//!
//! - **MoodState**: The fixed set of states a machine may occupy
//! - **MachineConfig**: Declared states and their event transitions
//! - **History**: Undo/redo stacks of previously active states
//!
//! # Example
//!
//! ```rust
//! use moodset::{MoodState, StateMachine};
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "states": {
//!         "normal": { "transitions": { "work": "busy" } },
//!         "busy": { "transitions": { "rest": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! machine.trigger("work").unwrap();
//! assert_eq!(machine.state(), MoodState::Busy);
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), MoodState::Normal);
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), MoodState::Busy);
//!
//! assert_eq!(machine.states(Some("work")), vec!["normal"]);
//! ```

pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::config::{ConfigError, MachineConfig, StateDefinition};
pub use crate::core::{History, MoodState};
pub use crate::machine::{InvalidTarget, MachineBuilder, MachineError, StateMachine};
