//! Daily Routine
//!
//! This example walks a machine through a day using event-driven transitions,
//! then rewinds and replays part of it with undo/redo.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Triggering transitions by event name
//! - Rejected events leave the state alone
//! - Undo/redo history
//!
//! Run with: RUST_LOG=moodset=debug cargo run --example daily_routine

use moodset::{MachineError, StateMachine};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ROUTINE: &str = r#"{
    "states": {
        "normal": { "transitions": { "study": "busy", "get_tired": "sleeping", "get_hungry": "hungry" } },
        "busy": { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
        "hungry": { "transitions": { "eat": "normal" } },
        "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
    }
}"#;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Daily Routine Example ===\n");

    let mut machine = StateMachine::from_json(ROUTINE)?;
    println!("Starting state: {}", machine.state());
    println!("All states: {:?}", machine.states(None));
    println!("States that react to get_hungry: {:?}", machine.states(Some("get_hungry")));

    for event in ["study", "get_hungry", "eat", "get_tired", "get_up"] {
        machine.trigger(event)?;
        println!("{event:>12} -> {}", machine.state());
    }

    match machine.trigger("eat") {
        Ok(()) => println!("Unexpectedly ate again"),
        Err(err) => println!("\nRejected: {err}"),
    }

    println!("\nRewinding two steps");
    machine.undo();
    machine.undo();
    println!("Now: {}", machine.state());

    println!("Replaying one step");
    machine.redo();
    println!("Now: {}", machine.state());

    machine.reset();
    machine.clear_history();
    println!(
        "\nAfter reset and clear: {} (undo available: {})",
        machine.state(),
        machine.history().can_undo()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
