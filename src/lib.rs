//! event-fsm: a small embeddable finite state machine driven by named events
//!
//! A host application declares which event moves which state to which
//! target, attaches callbacks that run before a transition commits, and then
//! fires events against a value it owns. The machine only ever reads and
//! writes that value's state identifier.
//!
//! # Core Concepts
//!
//! - **Stateful**: capability trait for any value with a state identifier
//! - **Transition table**: event → (source state → target state)
//! - **Callbacks**: ordered, payload-receiving hooks per target state; any
//!   error vetoes the transition and leaves the entity untouched
//! - **State errors**: optional per-state errors reported instead of a
//!   generic invalid-transition error
//!
//! # Example
//!
//! ```rust
//! use event_fsm::machine::{StateMachine, TransitionError};
//! use event_fsm::transitions;
//!
//! let mut status = "pending".to_string();
//! let mut machine = StateMachine::<_, u32, String>::new(&mut status);
//!
//! machine
//!     .when("approve", transitions! { "pending" => "approved" })
//!     .when("reject", transitions! { "pending" => "rejected" })
//!     .on("approved", |amount: &u32| {
//!         if *amount > 10_000 {
//!             Err(format!("{amount} needs a second signature"))
//!         } else {
//!             Ok(())
//!         }
//!     })
//!     .error_for("rejected", "rejected requests are final".to_string());
//!
//! let err = machine.trigger("approve", &50_000).unwrap_err();
//! assert!(matches!(err, TransitionError::CallbackFailed { .. }));
//! assert_eq!(machine.current_state(), "pending");
//!
//! machine.trigger("reject", &0).unwrap();
//! let err = machine.trigger("approve", &0).unwrap_err();
//! assert_eq!(err.into_inner(), Some("rejected requests are final".to_string()));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Stateful, TransitionMap, TransitionTable};
pub use machine::{StateMachine, TransitionError};
