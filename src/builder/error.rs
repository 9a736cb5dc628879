//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No transitions defined. Call .when(event, map) before .build()")]
    NoTransitions,

    #[error("Transitions registered under an empty event name")]
    EmptyEvent,

    #[error("Callbacks registered for state '{state}', which no transition targets")]
    UnreachableCallback { state: String },
}
