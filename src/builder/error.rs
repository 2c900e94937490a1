//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when declaring a machine up front.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State name '{0}' is reserved for the sentinel")]
    ReservedName(String),

    #[error("State '{0}' declared more than once")]
    DuplicateState(String),

    #[error("Initial state '{0}' is not among the declared states")]
    UnknownInitialState(String),
}
