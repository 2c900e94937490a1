//! Callback capabilities carried by states.
//!
//! Actions and transition predicates are ordinary closures boxed behind
//! small wrapper types. Any `FnMut` qualifies, so callbacks may carry
//! their own mutable state (counters, sensor handles) rather than being
//! limited to free functions.

use std::fmt;

/// Executable behavior of a state.
///
/// Invoked each time the owning state is run. Returns whether the step
/// succeeded.
///
/// # Example
///
/// ```rust
/// use regime::core::Action;
///
/// let mut ticks = 0;
/// let mut warmup = Action::new(move || {
///     ticks += 1;
///     ticks >= 3
/// });
///
/// assert!(!warmup.call());
/// assert!(!warmup.call());
/// assert!(warmup.call());
/// ```
pub struct Action(Box<dyn FnMut() -> bool + Send>);

impl Action {
    /// Wrap a closure as a state action.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Action(Box::new(f))
    }

    /// The stub installed on freshly added states and on the sentinel.
    pub fn always_fail() -> Self {
        Action::new(|| false)
    }

    /// Run the action once.
    pub fn call(&mut self) -> bool {
        (self.0)()
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::always_fail()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action")
    }
}

/// Eligibility test of a state.
///
/// Given the name of the currently active state, returns whether the
/// owning state should become active now.
///
/// # Example
///
/// ```rust
/// use regime::core::TransitionPredicate;
///
/// let mut after_idle = TransitionPredicate::new(|active: &str| active == "idle");
///
/// assert!(after_idle.call("idle"));
/// assert!(!after_idle.call("scan"));
/// ```
pub struct TransitionPredicate(Box<dyn FnMut(&str) -> bool + Send>);

impl TransitionPredicate {
    /// Wrap a closure as a transition predicate.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&str) -> bool + Send + 'static,
    {
        TransitionPredicate(Box::new(f))
    }

    /// The stub installed on freshly added states and on the sentinel:
    /// never eligible.
    pub fn never() -> Self {
        TransitionPredicate::new(|_| false)
    }

    /// Evaluate the predicate against the active state's name.
    pub fn call(&mut self, active: &str) -> bool {
        (self.0)(active)
    }
}

impl Default for TransitionPredicate {
    fn default() -> Self {
        Self::never()
    }
}

impl fmt::Debug for TransitionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransitionPredicate")
    }
}
