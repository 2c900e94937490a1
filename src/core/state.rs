//! The state record and the reserved sentinel.
//!
//! A state couples a unique name with two callbacks: an action run while
//! the state is active, and a predicate deciding when the state should
//! take over. Equality is defined by name alone; callbacks never
//! participate in comparisons.

use super::callback::{Action, TransitionPredicate};
use std::fmt;

/// Reserved name of the sentinel state.
///
/// The sentinel is the always-fail fallback that becomes active whenever
/// no real state is. Its name cannot be used for user states.
pub const SENTINEL_NAME: &str = "dummyState";

/// One named mode of operation.
///
/// Freshly created states carry stub callbacks: the action always reports
/// failure and the predicate is never eligible. Callers install real
/// behavior afterwards, either through
/// [`StateMachine`](crate::machine::StateMachine) setters or through the
/// [`builder`](crate::builder) API.
///
/// # Example
///
/// ```rust
/// use regime::core::State;
///
/// let idle = State::new("idle");
/// let other_idle = State::new("idle");
/// let scan = State::new("scan");
///
/// // Name is the sole equality key.
/// assert_eq!(idle, other_idle);
/// assert_ne!(idle, scan);
/// ```
pub struct State {
    name: String,
    action: Action,
    predicate: TransitionPredicate,
}

impl State {
    /// Create a state with stub callbacks.
    pub fn new(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            action: Action::always_fail(),
            predicate: TransitionPredicate::never(),
        }
    }

    /// The built-in fallback state. Its callbacks are fixed failures.
    pub(crate) fn sentinel() -> Self {
        State::new(SENTINEL_NAME)
    }

    /// The state's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the reserved sentinel state.
    pub fn is_sentinel(&self) -> bool {
        self.name == SENTINEL_NAME
    }

    pub(crate) fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    pub(crate) fn set_predicate(&mut self, predicate: TransitionPredicate) {
        self.predicate = predicate;
    }

    /// Invoke the action and report its result verbatim.
    pub(crate) fn run(&mut self) -> bool {
        self.action.call()
    }

    /// Ask the predicate whether this state wants to become active.
    pub(crate) fn wants_control(&mut self, active: &str) -> bool {
        self.predicate.call(active)
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
