//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{CallbackRegistry, Stateful, TransitionMap, TransitionTable};
use crate::machine::state_machine::StateError;
use crate::machine::StateMachine;
use std::collections::HashMap;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike registering directly on a [`StateMachine`], the builder checks the
/// configuration as a whole before the machine is bound to an entity.
pub struct StateMachineBuilder<P, E> {
    table: TransitionTable,
    callbacks: CallbackRegistry<P, E>,
    overrides: HashMap<String, StateError<E>>,
}

impl<P, E> StateMachineBuilder<P, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::new(),
            callbacks: CallbackRegistry::new(),
            overrides: HashMap::new(),
        }
    }

    /// Register the transitions for `event`, replacing any earlier map.
    pub fn when(mut self, event: impl Into<String>, map: impl Into<TransitionMap>) -> Self {
        self.table.insert(event, map.into());
        self
    }

    /// Register every event of a prepared table, e.g. one loaded from a
    /// config file. Events already present are replaced.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table.extend(table);
        self
    }

    /// Append a callback for transitions into `state`.
    pub fn on<F>(mut self, state: impl Into<String>, callback: F) -> Self
    where
        F: FnMut(&P) -> Result<(), E> + Send + 'static,
    {
        self.callbacks.register(state, callback);
        self
    }

    /// Register the error reported when no transition leaves `state`.
    pub fn error_for(mut self, state: impl Into<String>, error: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        self.overrides
            .insert(state.into(), Box::new(move || error.clone()));
        self
    }

    /// Check the configuration and bind the machine to `entity`.
    pub fn build<S>(self, entity: &mut S) -> Result<StateMachine<'_, S, P, E>, BuildError>
    where
        S: Stateful + ?Sized,
    {
        if self.table.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if self.table.contains_event("") {
            return Err(BuildError::EmptyEvent);
        }

        let mut unreachable: Vec<&str> = self
            .callbacks
            .states()
            .filter(|state| !self.table.is_target(state))
            .collect();
        unreachable.sort_unstable();
        if let Some(state) = unreachable.first() {
            return Err(BuildError::UnreachableCallback {
                state: state.to_string(),
            });
        }

        Ok(StateMachine::from_parts(
            entity,
            self.table,
            self.callbacks,
            self.overrides,
        ))
    }
}

impl<P, E> Default for StateMachineBuilder<P, E> {
    fn default() -> Self {
        Self::new()
    }
}
