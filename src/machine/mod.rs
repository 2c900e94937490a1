//! The state machine: registry, execution engine and transition engine.
//!
//! A [`StateMachine`] owns an ordered registry of named states and tracks
//! which one is active. Callers drive it in a loop: `run` executes the
//! active state's action, `transition` scans the registry for the first
//! member whose predicate accepts the current active name. Insertion
//! order is the only tie-break between simultaneously eligible states.
//!
//! Every operation is total. When the active state's record disappears
//! (or nothing was ever added), execution falls back to the built-in
//! sentinel, whose action and predicate are fixed failures. A caller
//! observing persistent `run() == false` after a removal can infer that
//! nothing has replaced the removed state yet, without a separate error
//! channel.

use crate::core::{
    Action, State, TransitionKind, TransitionLog, TransitionPredicate, TransitionRecord,
    SENTINEL_NAME,
};
use chrono::Utc;

/// A registry of named states plus the handle of the currently active one.
///
/// The registry rejects duplicate names; all lookup failures are reported
/// as a `false` return with no mutation. The active state is addressed by
/// name and re-resolved through the registry on every access, so it stays
/// valid across arbitrary add/remove sequences.
///
/// # Example
///
/// ```rust
/// use regime::StateMachine;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let mut machine = StateMachine::new();
/// machine.add_state("idle");
/// machine.add_state("scan");
///
/// let ready = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&ready);
/// machine.set_action("scan", || true);
/// machine.set_transition_predicate("scan", move |_active: &str| {
///     flag.load(Ordering::Relaxed)
/// });
///
/// machine.transition_to("idle");
/// assert_eq!(machine.active_state_name(), "idle");
///
/// // Not eligible yet: the predicate scan leaves "idle" active.
/// assert!(!machine.transition());
///
/// ready.store(true, Ordering::Relaxed);
/// assert!(machine.transition());
/// assert_eq!(machine.active_state_name(), "scan");
/// assert!(machine.run());
/// ```
#[derive(Debug)]
pub struct StateMachine {
    states: Vec<State>,
    /// Name of the active state, resolved through the registry on access.
    active: String,
    /// Fallback used when `active` has no registry member.
    sentinel: State,
    history: TransitionLog,
}

impl StateMachine {
    /// Create a machine with the sentinel installed as sole member and
    /// active state.
    pub fn new() -> Self {
        StateMachine {
            states: vec![State::sentinel()],
            active: SENTINEL_NAME.to_string(),
            sentinel: State::sentinel(),
            history: TransitionLog::new(),
        }
    }

    /// Add a state with stub callbacks.
    ///
    /// Returns `false` without mutation when the name is already present
    /// or is the sentinel's reserved name. The first real state evicts
    /// the bootstrap sentinel member.
    pub fn add_state(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name == SENTINEL_NAME || self.contains(&name) {
            return false;
        }
        self.states.retain(|s| !s.is_sentinel());
        self.states.push(State::new(name));
        true
    }

    /// Remove the state with this name.
    ///
    /// Returns `false` when the name is unknown or reserved. Removing the
    /// active state resets the active handle to the sentinel; emptying
    /// the registry reinstates the sentinel as its sole member.
    pub fn remove_state(&mut self, name: &str) -> bool {
        if name == SENTINEL_NAME {
            return false;
        }
        let Some(index) = self.states.iter().position(|s| s.name() == name) else {
            return false;
        };
        self.states.remove(index);

        if self.active == name {
            self.history = self.history.record(TransitionRecord {
                from: name.to_string(),
                to: SENTINEL_NAME.to_string(),
                at: Utc::now(),
                kind: TransitionKind::Fallback,
            });
            self.active = SENTINEL_NAME.to_string();
        }
        if self.states.is_empty() {
            self.states.push(State::sentinel());
        }
        true
    }

    /// Replace the action of the named state.
    ///
    /// Returns `false` when the name is unknown or reserved (the
    /// sentinel's callbacks are fixed).
    pub fn set_action<F>(&mut self, name: &str, action: F) -> bool
    where
        F: FnMut() -> bool + Send + 'static,
    {
        if name == SENTINEL_NAME {
            return false;
        }
        match self.lookup_mut(name) {
            Some(state) => {
                state.set_action(Action::new(action));
                true
            }
            None => false,
        }
    }

    /// Replace the transition predicate of the named state.
    ///
    /// Returns `false` when the name is unknown or reserved.
    pub fn set_transition_predicate<F>(&mut self, name: &str, predicate: F) -> bool
    where
        F: FnMut(&str) -> bool + Send + 'static,
    {
        if name == SENTINEL_NAME {
            return false;
        }
        match self.lookup_mut(name) {
            Some(state) => {
                state.set_predicate(TransitionPredicate::new(predicate));
                true
            }
            None => false,
        }
    }

    /// Run the active state's action and return its result verbatim.
    ///
    /// Neither the registry nor the active handle is touched.
    pub fn run(&mut self) -> bool {
        self.active_state_mut().run()
    }

    /// Run the active state's action, then optionally perform the
    /// predicate scan.
    ///
    /// The action runs first and its result is returned regardless of
    /// whether a transition occurred.
    pub fn run_with_transition(&mut self, transition_too: bool) -> bool {
        let ran = self.run();
        if transition_too {
            self.transition();
        }
        ran
    }

    /// Predicate-driven transition: scan the registry in insertion order
    /// and activate the first member whose predicate accepts the current
    /// active name.
    ///
    /// A member whose name equals the active name is never considered, so
    /// self-transitions cannot happen here. Returns `true` iff a switch
    /// occurred.
    pub fn transition(&mut self) -> bool {
        let active = self.active.clone();
        let mut chosen = None;
        for state in &mut self.states {
            if state.name() != active.as_str() && state.wants_control(&active) {
                chosen = Some(state.name().to_string());
                break;
            }
        }
        let Some(to) = chosen else {
            return false;
        };
        self.history = self.history.record(TransitionRecord {
            from: active,
            to: to.clone(),
            at: Utc::now(),
            kind: TransitionKind::Scan,
        });
        self.active = to;
        true
    }

    /// Unconditional transition to the named state, bypassing predicate
    /// evaluation entirely.
    ///
    /// Returns `false` without mutation when the name is unknown. Naming
    /// the currently active state is a legal no-op success.
    pub fn transition_to(&mut self, name: &str) -> bool {
        if !self.contains(name) {
            return false;
        }
        if self.active != name {
            self.history = self.history.record(TransitionRecord {
                from: self.active.clone(),
                to: name.to_string(),
                at: Utc::now(),
                kind: TransitionKind::Explicit,
            });
            self.active = name.to_string();
        }
        true
    }

    /// Name of the currently active state; the sentinel's reserved name
    /// when nothing else is active.
    pub fn active_state_name(&self) -> &str {
        &self.active
    }

    /// Number of registry members. At least 1: the sentinel stands in
    /// when no real states exist.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: the sentinel keeps the registry populated.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether a member with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Member names in insertion order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(State::name)
    }

    /// Log of every active-state change so far.
    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    // Linear scan; registries are expected to stay small.
    fn lookup(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name() == name)
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut State> {
        self.states.iter_mut().find(|s| s.name() == name)
    }

    /// Resolve the active handle to a concrete state, falling back to the
    /// owned sentinel when the name has no registry member.
    fn active_state_mut(&mut self) -> &mut State {
        let StateMachine {
            states,
            active,
            sentinel,
            ..
        } = self;
        states
            .iter_mut()
            .find(|s| s.name() == active.as_str())
            .unwrap_or(sentinel)
    }

    /// Insert a fully configured state. Callers must have validated the
    /// name against duplicates and the reserved sentinel name.
    pub(crate) fn install(&mut self, state: State) {
        self.states.retain(|s| !s.is_sentinel());
        self.states.push(state);
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
