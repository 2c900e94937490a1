//! Regime: a runtime state machine for control loops.
//!
//! A [`StateMachine`] is an ordered registry of named states. Each state
//! carries an action (run while the state is active) and a transition
//! predicate (deciding when the state should take over). Callers such as
//! robotics loops drive the machine tick by tick: run the active state,
//! then optionally let the registry pick a successor.
//!
//! # Core concepts
//!
//! - **State**: a named unit of behavior with an action and a predicate
//! - **Active state**: the state currently selected for execution,
//!   addressed by name so it survives registry mutation
//! - **Sentinel**: a reserved always-fail fallback that keeps every
//!   operation total when no real state is active
//! - **First-match-wins**: the predicate scan activates the earliest
//!   inserted eligible state and stops
//!
//! # Example
//!
//! ```rust
//! use regime::StateMachine;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let mut machine = StateMachine::new();
//!
//! // Nothing added yet: the sentinel runs and fails.
//! assert!(!machine.run_with_transition(true));
//!
//! machine.add_state("state1");
//!
//! let flag = Arc::new(AtomicUsize::new(0));
//! let watched = Arc::clone(&flag);
//! machine.set_action("state1", move || watched.load(Ordering::Relaxed) == 1);
//! machine.set_transition_predicate("state1", |_active: &str| true);
//!
//! // The scan activates state1; its action still reports failure.
//! assert!(!machine.run_with_transition(true));
//! assert_eq!(machine.active_state_name(), "state1");
//!
//! flag.store(1, Ordering::Relaxed);
//! assert!(machine.run_with_transition(true));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder};
pub use core::{
    Action, State, TransitionKind, TransitionLog, TransitionPredicate, TransitionRecord,
    SENTINEL_NAME,
};
pub use machine::StateMachine;
