//! Builder for assembling a whole machine.

use super::error::BuildError;
use super::state::StateBuilder;
use crate::core::SENTINEL_NAME;
use crate::machine::StateMachine;

/// Builder for constructing a [`StateMachine`] with a fluent API.
///
/// Equivalent to a sequence of `add_state`/`set_action`/
/// `set_transition_predicate` calls, followed by an explicit transition
/// to the initial state when one was named.
///
/// # Example
///
/// ```rust
/// use regime::builder::{state, MachineBuilder};
///
/// let machine = MachineBuilder::new()
///     .state(state("idle").action(|| true))?
///     .state(state("scan").predicate(|active: &str| active == "idle"))?
///     .initial("idle")
///     .build()?;
///
/// assert_eq!(machine.active_state_name(), "idle");
/// # Ok::<(), regime::BuildError>(())
/// ```
pub struct MachineBuilder {
    states: Vec<StateBuilder>,
    initial: Option<String>,
}

impl MachineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        MachineBuilder {
            states: Vec::new(),
            initial: None,
        }
    }

    /// Declare a state. Reserved and duplicate names are rejected
    /// immediately.
    pub fn state(mut self, builder: StateBuilder) -> Result<Self, BuildError> {
        if builder.name() == SENTINEL_NAME {
            return Err(BuildError::ReservedName(builder.name().to_string()));
        }
        if self.states.iter().any(|s| s.name() == builder.name()) {
            return Err(BuildError::DuplicateState(builder.name().to_string()));
        }
        self.states.push(builder);
        Ok(self)
    }

    /// Name the state to activate once the machine is built. Optional:
    /// without it the machine starts on the sentinel.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Build the machine.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if let Some(initial) = &self.initial {
            if !self.states.iter().any(|s| s.name() == initial) {
                return Err(BuildError::UnknownInitialState(initial.clone()));
            }
        }

        let mut machine = StateMachine::new();
        let initial = self.initial;
        for builder in self.states {
            machine.install(builder.build()?);
        }
        if let Some(initial) = initial {
            machine.transition_to(&initial);
        }
        Ok(machine)
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
