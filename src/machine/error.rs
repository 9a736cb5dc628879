//! Errors returned when a trigger cannot complete.

use thiserror::Error;

/// Why a trigger did not move the entity.
///
/// `E` is the host's own error type, used both by callbacks and by the
/// per-state overrides registered with
/// [`StateMachine::error_for`](crate::machine::StateMachine::error_for).
/// Those errors come back untouched and can be recovered with
/// [`into_inner`](Self::into_inner).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError<E> {
    #[error("Unknown event '{event}'")]
    UnknownEvent { event: String },

    #[error("Invalid transition: event '{event}' has no target from state '{state}'")]
    InvalidTransition { event: String, state: String },

    #[error("State '{state}' rejected event '{event}': {error}")]
    StateRejected {
        event: String,
        state: String,
        #[source]
        error: E,
    },

    #[error("Callback vetoed transition to '{target}' on event '{event}': {error}")]
    CallbackFailed {
        event: String,
        target: String,
        #[source]
        error: E,
    },
}

impl<E> TransitionError<E> {
    /// The host error carried by an override or a failed callback.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::StateRejected { error, .. } | Self::CallbackFailed { error, .. } => Some(error),
            Self::UnknownEvent { .. } | Self::InvalidTransition { .. } => None,
        }
    }

    /// Borrowing form of [`into_inner`](Self::into_inner).
    pub fn inner(&self) -> Option<&E> {
        match self {
            Self::StateRejected { error, .. } | Self::CallbackFailed { error, .. } => Some(error),
            Self::UnknownEvent { .. } | Self::InvalidTransition { .. } => None,
        }
    }

    /// The event named by the failed trigger.
    pub fn event(&self) -> &str {
        match self {
            Self::UnknownEvent { event }
            | Self::InvalidTransition { event, .. }
            | Self::StateRejected { event, .. }
            | Self::CallbackFailed { event, .. } => event,
        }
    }

    /// True when the transition was refused before any callback ran.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::CallbackFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[error("insufficient funds")]
    struct InsufficientFunds;

    #[test]
    fn messages_name_event_and_state() {
        let unknown: TransitionError<InsufficientFunds> = TransitionError::UnknownEvent {
            event: "approve".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown event 'approve'");

        let invalid: TransitionError<InsufficientFunds> = TransitionError::InvalidTransition {
            event: "approve".to_string(),
            state: "approved".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid transition: event 'approve' has no target from state 'approved'"
        );
    }

    #[test]
    fn callback_failure_exposes_source() {
        let err = TransitionError::CallbackFailed {
            event: "pay".to_string(),
            target: "paid".to_string(),
            error: InsufficientFunds,
        };

        assert_eq!(
            err.to_string(),
            "Callback vetoed transition to 'paid' on event 'pay': insufficient funds"
        );
        assert!(err.source().is_some());
        assert!(!err.is_rejection());
        assert_eq!(err.event(), "pay");
        assert_eq!(err.into_inner(), Some(InsufficientFunds));
    }

    #[test]
    fn generic_errors_carry_no_host_error() {
        let err: TransitionError<InsufficientFunds> = TransitionError::InvalidTransition {
            event: "pay".to_string(),
            state: "paid".to_string(),
        };

        assert!(err.is_rejection());
        assert!(err.inner().is_none());
        assert!(err.source().is_none());
    }
}
