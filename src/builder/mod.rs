//! Builder API for declaring a machine up front.
//!
//! The imperative [`StateMachine`](crate::StateMachine) surface reports
//! every failure as a bare `false`. The builder trades that in for typed
//! [`BuildError`]s at construction time, which suits machines whose shape
//! is known before the control loop starts.

mod error;
mod machine;
mod state;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;

/// Shorthand for [`StateBuilder::named`].
///
/// # Example
///
/// ```rust
/// use regime::builder::state;
///
/// let idle = state("idle").action(|| true);
/// ```
pub fn state(name: impl Into<String>) -> StateBuilder {
    StateBuilder::named(name)
}
