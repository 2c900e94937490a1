//! Property-based tests for the state registry.
//!
//! These tests use proptest to verify the registry invariants hold
//! across many randomly generated add/remove/transition sequences.

use proptest::prelude::*;
use regime::{StateMachine, SENTINEL_NAME};

/// Small pool of names so generated sequences collide often.
fn arbitrary_name() -> impl Strategy<Value = String> {
    (0..6u8).prop_map(|i| format!("s{i}"))
}

#[derive(Clone, Debug)]
enum Op {
    Add(String),
    Remove(String),
    TransitionTo(String),
    Scan,
    Run,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_name().prop_map(Op::Add),
        arbitrary_name().prop_map(Op::Remove),
        arbitrary_name().prop_map(Op::TransitionTo),
        Just(Op::Scan),
        Just(Op::Run),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Add(name) => {
            machine.add_state(name.clone());
        }
        Op::Remove(name) => {
            machine.remove_state(name);
        }
        Op::TransitionTo(name) => {
            machine.transition_to(name);
        }
        Op::Scan => {
            machine.transition();
        }
        Op::Run => {
            machine.run();
        }
    }
}

proptest! {
    #[test]
    fn names_stay_unique(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new();

        for op in &ops {
            apply(&mut machine, op);

            let mut names: Vec<_> = machine.state_names().collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), total);
        }
    }

    #[test]
    fn registry_is_never_empty(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new();

        for op in &ops {
            apply(&mut machine, op);

            prop_assert!(!machine.is_empty());
            prop_assert!(machine.len() >= 1);
        }
    }

    #[test]
    fn active_handle_is_always_resolvable(
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut machine = StateMachine::new();

        for op in &ops {
            apply(&mut machine, op);

            let active = machine.active_state_name().to_string();
            prop_assert!(
                active == SENTINEL_NAME || machine.contains(&active),
                "active state '{}' is neither the sentinel nor a member",
                active
            );
        }
    }

    #[test]
    fn double_add_is_always_rejected(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        name in arbitrary_name()
    ) {
        let mut machine = StateMachine::new();
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.add_state(name.clone());
        let size = machine.len();

        prop_assert!(!machine.add_state(name.clone()));
        prop_assert_eq!(machine.len(), size);
        // Whatever the preceding ops did, the state exists by now.
        prop_assert!(machine.contains(&name));
    }

    #[test]
    fn remove_of_absent_name_mutates_nothing(
        ops in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut machine = StateMachine::new();
        for op in &ops {
            apply(&mut machine, op);
        }

        let names: Vec<String> = machine.state_names().map(str::to_string).collect();
        let active = machine.active_state_name().to_string();

        prop_assert!(!machine.remove_state("never-added"));

        let after: Vec<String> = machine.state_names().map(str::to_string).collect();
        prop_assert_eq!(after, names);
        prop_assert_eq!(machine.active_state_name(), active);
    }

    #[test]
    fn removing_everything_reinstates_the_sentinel(
        names in prop::collection::hash_set(arbitrary_name(), 1..6)
    ) {
        let mut machine = StateMachine::new();
        for name in &names {
            prop_assert!(machine.add_state(name.clone()));
        }

        for name in &names {
            prop_assert!(machine.remove_state(name));
        }

        prop_assert_eq!(machine.len(), 1);
        prop_assert_eq!(machine.active_state_name(), SENTINEL_NAME);
        let members: Vec<_> = machine.state_names().collect();
        prop_assert_eq!(members, vec![SENTINEL_NAME]);
    }

    #[test]
    fn run_passes_through_the_action_result(result in any::<bool>()) {
        let mut machine = StateMachine::new();
        machine.add_state("probe");
        machine.set_action("probe", move || result);
        machine.transition_to("probe");

        prop_assert_eq!(machine.run(), result);
        // Running does not move the handle.
        prop_assert_eq!(machine.active_state_name(), "probe");
    }

    #[test]
    fn scan_never_picks_the_active_state(
        names in prop::collection::hash_set(arbitrary_name(), 1..6)
    ) {
        let mut machine = StateMachine::new();
        for name in &names {
            machine.add_state(name.clone());
            // Everyone always wants control.
            machine.set_transition_predicate(name, |_: &str| true);
        }

        // Walk a few scans; the active state must change every time
        // because self-selection is excluded and all others are eligible.
        for _ in 0..4 {
            let before = machine.active_state_name().to_string();
            let switched = machine.transition();
            if names.len() == 1 && before != SENTINEL_NAME {
                // Sole state active: nothing else to pick.
                prop_assert!(!switched);
            } else {
                prop_assert!(switched);
                prop_assert_ne!(machine.active_state_name(), before);
            }
        }
    }

    #[test]
    fn explicit_transition_bypasses_predicates(
        names in prop::collection::hash_set(arbitrary_name(), 1..6)
    ) {
        let mut machine = StateMachine::new();
        for name in &names {
            machine.add_state(name.clone());
            machine.set_transition_predicate(name, |_: &str| false);
        }

        for name in &names {
            prop_assert!(machine.transition_to(name));
            prop_assert_eq!(machine.active_state_name(), name.as_str());
        }
    }
}
