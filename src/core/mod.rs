//! Core data types of the state machine.
//!
//! This module contains the pieces a machine is assembled from:
//! - The `Stateful` capability implemented by host entities
//! - Transition maps and tables keyed by event name
//! - The ordered callback registry
//!
//! None of these types drive transitions on their own; that is the job of
//! [`StateMachine`](crate::machine::StateMachine).

mod callback;
mod state;
mod table;

pub use callback::{Callback, CallbackRegistry};
pub use state::Stateful;
pub use table::{Resolution, TransitionMap, TransitionTable};
