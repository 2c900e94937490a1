//! Per-state configuration builder.

use super::error::BuildError;
use crate::core::{Action, State, TransitionPredicate, SENTINEL_NAME};

/// Declares one state: its name plus optional callbacks.
///
/// Callbacks left unset keep the always-fail stubs, matching a state
/// created through [`StateMachine::add_state`](crate::StateMachine::add_state).
pub struct StateBuilder {
    name: String,
    action: Option<Action>,
    predicate: Option<TransitionPredicate>,
}

impl StateBuilder {
    /// Start declaring a state with this name.
    pub fn named(name: impl Into<String>) -> Self {
        StateBuilder {
            name: name.into(),
            action: None,
            predicate: None,
        }
    }

    /// Install the action run while this state is active.
    pub fn action<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.action = Some(Action::new(f));
        self
    }

    /// Install the predicate deciding when this state takes over.
    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) -> bool + Send + 'static,
    {
        self.predicate = Some(TransitionPredicate::new(f));
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<State, BuildError> {
        if self.name == SENTINEL_NAME {
            return Err(BuildError::ReservedName(self.name));
        }
        let mut state = State::new(self.name);
        if let Some(action) = self.action {
            state.set_action(action);
        }
        if let Some(predicate) = self.predicate {
            state.set_predicate(predicate);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_builder_keeps_failing_stubs() {
        let mut state = StateBuilder::named("idle").build().unwrap();

        assert_eq!(state.name(), "idle");
        assert!(!state.run());
        assert!(!state.wants_control("anything"));
    }

    #[test]
    fn installed_callbacks_survive_build() {
        let mut state = StateBuilder::named("scan")
            .action(|| true)
            .predicate(|active: &str| active == "idle")
            .build()
            .unwrap();

        assert!(state.run());
        assert!(state.wants_control("idle"));
        assert!(!state.wants_control("dock"));
    }

    #[test]
    fn reserved_name_fails_to_build() {
        let result = StateBuilder::named(SENTINEL_NAME).build();

        assert!(matches!(result, Err(BuildError::ReservedName(_))));
    }
}
