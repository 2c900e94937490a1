//! Core data types for the state registry.
//!
//! This module contains the leaf building blocks of the machine:
//! - State records and the reserved sentinel
//! - Callback capabilities (actions, transition predicates)
//! - Immutable history of active-state changes

mod callback;
mod history;
mod state;

pub use callback::{Action, TransitionPredicate};
pub use history::{TransitionKind, TransitionLog, TransitionRecord};
pub use state::{State, SENTINEL_NAME};
