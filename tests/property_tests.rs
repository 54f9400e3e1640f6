//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive machines through random operation
//! sequences and check the history bookkeeping after every step.

use moodset::{MachineConfig, MachineError, MoodState, StateDefinition, StateMachine};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["normal", "busy", "hungry", "sleeping", "bored", "Normal"];
const EVENTS: [&str; 4] = ["work", "rest", "eat", "nap"];

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Reset,
    Undo,
    Redo,
    Clear,
}

fn config() -> MachineConfig {
    MachineConfig::new()
        .state(
            "normal",
            StateDefinition::new().on("work", "busy").on("nap", "sleeping"),
        )
        .state(
            "busy",
            StateDefinition::new().on("rest", "normal").on("eat", "hungry"),
        )
        .state("hungry", StateDefinition::new().on("eat", "normal"))
        .state("sleeping", StateDefinition::new().on("work", "bored"))
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4usize) -> MoodState {
        MoodState::ALL[variant]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len()).prop_map(|i| Op::Change(NAMES[i])),
        (0..EVENTS.len()).prop_map(|i| Op::Trigger(EVENTS[i])),
        Just(Op::Reset),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn history_depths_follow_operations(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(config());

        for op in ops {
            let before = machine.state();
            let undo = machine.history().undo_depth();
            let redo = machine.history().redo_depth();

            match op {
                Op::Change(name) | Op::Trigger(name) => {
                    let is_trigger = matches!(op, Op::Trigger(_));
                    let result = if is_trigger {
                        machine.trigger(name)
                    } else {
                        machine.change_state(name)
                    };

                    match result {
                        Ok(()) => {
                            prop_assert_eq!(machine.history().undo_depth(), undo + 1);
                            prop_assert_eq!(machine.history().undo_states().last(), Some(&before));
                            prop_assert_eq!(machine.history().redo_depth(), 0);
                        }
                        Err(err) => {
                            prop_assert!(matches!(err, MachineError::InvalidState(_)));
                            prop_assert_eq!(machine.state(), before);
                            prop_assert_eq!(machine.history().undo_depth(), undo);
                            let expected_redo = if is_trigger { 0 } else { redo };
                            prop_assert_eq!(machine.history().redo_depth(), expected_redo);
                        }
                    }
                }
                Op::Reset => {
                    machine.reset();
                    prop_assert_eq!(machine.state(), MoodState::Normal);
                    prop_assert_eq!(machine.history().undo_depth(), undo + 1);
                    prop_assert_eq!(machine.history().redo_depth(), 0);
                }
                Op::Undo => {
                    let moved = machine.undo();
                    prop_assert_eq!(moved, undo > 0);
                    if moved {
                        prop_assert_eq!(machine.history().undo_depth(), undo - 1);
                        prop_assert_eq!(machine.history().redo_depth(), redo + 1);
                        prop_assert_eq!(machine.history().redo_states().last(), Some(&before));
                    } else {
                        prop_assert_eq!(machine.state(), before);
                        prop_assert_eq!(machine.history().redo_depth(), redo);
                    }
                }
                Op::Redo => {
                    let moved = machine.redo();
                    prop_assert_eq!(moved, redo > 0);
                    prop_assert_eq!(machine.history().undo_depth(), undo);
                    if moved {
                        prop_assert_eq!(machine.history().redo_depth(), redo - 1);
                    } else {
                        prop_assert_eq!(machine.state(), before);
                    }
                }
                Op::Clear => {
                    machine.clear_history();
                    prop_assert_eq!(machine.state(), before);
                    prop_assert!(!machine.undo());
                    prop_assert!(!machine.redo());
                }
            }
        }
    }

    #[test]
    fn change_then_undo_restores_prior_state(
        path in prop::collection::vec(arbitrary_state(), 1..10)
    ) {
        let mut machine = StateMachine::new(config());
        let mut visited = vec![machine.state()];

        for state in &path {
            machine.change_state(state.name()).unwrap();
            visited.push(*state);
        }

        // Walk back through every recorded state.
        for expected in visited.iter().rev().skip(1) {
            prop_assert!(machine.undo());
            prop_assert_eq!(machine.state(), *expected);
        }
        prop_assert!(!machine.undo());
        prop_assert_eq!(machine.state(), MoodState::Normal);
    }

    #[test]
    fn undo_then_redo_round_trips(
        path in prop::collection::vec(arbitrary_state(), 1..10),
        steps in 1..10usize
    ) {
        let mut machine = StateMachine::new(config());
        for state in &path {
            machine.change_to(*state);
        }

        let steps = steps.min(path.len());
        let mut undone = Vec::new();
        for _ in 0..steps {
            undone.push(machine.state());
            prop_assert!(machine.undo());
        }

        for expected in undone.iter().rev() {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.state(), *expected);
        }
        prop_assert!(!machine.redo());
    }

    #[test]
    fn unknown_names_never_change_state(
        name in "[a-zA-Z_]{0,12}",
        start in arbitrary_state()
    ) {
        prop_assume!(MoodState::from_name(&name).is_none());

        let mut machine = StateMachine::new(config());
        machine.change_to(start);

        let result = machine.change_state(&name);

        prop_assert!(matches!(result, Err(MachineError::InvalidState(_))));
        prop_assert_eq!(machine.state(), start);
        prop_assert_eq!(machine.history().undo_depth(), 1);
    }

    #[test]
    fn states_without_event_is_constant(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut machine = StateMachine::new(config());
        for op in ops {
            match op {
                Op::Change(name) => { let _ = machine.change_state(name); }
                Op::Trigger(event) => { let _ = machine.trigger(event); }
                Op::Reset => machine.reset(),
                Op::Undo => { machine.undo(); }
                Op::Redo => { machine.redo(); }
                Op::Clear => machine.clear_history(),
            }
        }

        prop_assert_eq!(machine.states(None), vec!["normal", "busy", "hungry", "sleeping"]);
    }
}
