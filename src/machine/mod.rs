//! Execution of event-triggered transitions.
//!
//! # Key Concepts
//!
//! - **Trigger**: resolve an event against the current state, run the
//!   target's callbacks, then commit
//! - **Veto**: any callback error aborts the trigger with the entity untouched
//! - **Overrides**: per-state errors reported in place of a generic
//!   invalid-transition error

mod error;
pub(crate) mod state_machine;

pub use error::TransitionError;
pub use state_machine::StateMachine;
