//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder that validates a whole
//! configuration up front, plus macros for declaring transition maps and
//! tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
