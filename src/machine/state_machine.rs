//! State machine that drives a borrowed [`Stateful`] entity.

use crate::core::{CallbackRegistry, Resolution, Stateful, TransitionMap, TransitionTable};
use crate::machine::error::TransitionError;
use std::collections::HashMap;
use std::fmt;

/// Produces a fresh copy of a registered per-state error on each report.
pub(crate) type StateError<E> = Box<dyn Fn() -> E + Send>;

/// Event-driven state machine bound to a host entity.
///
/// The machine owns its transition table, callback registry and per-state
/// error overrides, and holds a mutable borrow of the entity. `P` is the
/// payload handed to callbacks and `E` the host error type they return; the
/// machine never inspects either.
///
/// Every method that changes the machine takes `&mut self`, so configuration
/// can never interleave with a running trigger. Changes made between
/// triggers apply from the next trigger on.
///
/// # Example
///
/// ```rust
/// use event_fsm::machine::{StateMachine, TransitionError};
///
/// let mut status = "pending".to_string();
/// let mut machine = StateMachine::<_, (), String>::new(&mut status);
/// machine.when("approve", [("pending", "approved")]);
///
/// machine.trigger("approve", &()).unwrap();
/// assert_eq!(machine.current_state(), "approved");
///
/// let err = machine.trigger("approve", &()).unwrap_err();
/// assert!(matches!(err, TransitionError::InvalidTransition { .. }));
/// ```
pub struct StateMachine<'a, S: Stateful + ?Sized, P, E> {
    entity: &'a mut S,
    table: TransitionTable,
    callbacks: CallbackRegistry<P, E>,
    overrides: HashMap<String, StateError<E>>,
}

impl<'a, S: Stateful + ?Sized, P, E> StateMachine<'a, S, P, E> {
    /// Bind a new machine with empty tables to `entity`.
    ///
    /// The entity's current state is not inspected.
    pub fn new(entity: &'a mut S) -> Self {
        Self::with_table(entity, TransitionTable::new())
    }

    /// Bind a new machine to `entity`, starting from an existing table.
    pub fn with_table(entity: &'a mut S, table: TransitionTable) -> Self {
        Self {
            entity,
            table,
            callbacks: CallbackRegistry::new(),
            overrides: HashMap::new(),
        }
    }

    pub(crate) fn from_parts(
        entity: &'a mut S,
        table: TransitionTable,
        callbacks: CallbackRegistry<P, E>,
        overrides: HashMap<String, StateError<E>>,
    ) -> Self {
        Self {
            entity,
            table,
            callbacks,
            overrides,
        }
    }

    /// Register the source → target map for `event`, replacing any earlier
    /// map for the same event.
    pub fn when(&mut self, event: impl Into<String>, map: impl Into<TransitionMap>) -> &mut Self {
        let event = event.into();
        let map = map.into();
        tracing::trace!(event = %event, edges = map.len(), "registering transitions");
        self.table.insert(event, map);
        self
    }

    /// Append a callback run before any transition into `state` commits.
    pub fn on<F>(&mut self, state: impl Into<String>, callback: F) -> &mut Self
    where
        F: FnMut(&P) -> Result<(), E> + Send + 'static,
    {
        let state = state.into();
        tracing::trace!(state = %state, "registering callback");
        self.callbacks.register(state, callback);
        self
    }

    /// Report `error` instead of a generic invalid-transition error whenever
    /// a trigger finds no transition out of `state`.
    pub fn error_for(&mut self, state: impl Into<String>, error: E) -> &mut Self
    where
        E: Clone + Send + 'static,
    {
        let state = state.into();
        tracing::trace!(state = %state, "registering state error");
        self.overrides.insert(state, Box::new(move || error.clone()));
        self
    }

    /// The entity's current state identifier.
    pub fn current_state(&self) -> &str {
        self.entity.state()
    }

    pub fn entity(&self) -> &S {
        self.entity
    }

    /// Release the machine and hand the entity borrow back.
    pub fn into_entity(self) -> &'a mut S {
        self.entity
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Whether `event` would pass validation from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        matches!(
            self.table.resolve(event, self.entity.state()),
            Resolution::Target(_)
        )
    }

    /// Events that would pass validation from the current state, sorted.
    pub fn available_events(&self) -> Vec<&str> {
        self.table.events_from(self.entity.state()).collect()
    }

    /// Whether no registered event leads out of the current state.
    pub fn is_terminal(&self) -> bool {
        self.table.events_from(self.entity.state()).next().is_none()
    }

    /// Check whether `event` may fire from `state` without running callbacks
    /// or touching the entity, returning the target on success.
    pub fn validate_transition(&self, event: &str, state: &str) -> Result<&str, TransitionError<E>> {
        match self.table.resolve(event, state) {
            Resolution::Target(target) => Ok(target),
            Resolution::UnknownEvent => Err(TransitionError::UnknownEvent {
                event: event.to_string(),
            }),
            Resolution::NoTarget => Err(match self.overrides.get(state) {
                Some(error) => TransitionError::StateRejected {
                    event: event.to_string(),
                    state: state.to_string(),
                    error: error(),
                },
                None => TransitionError::InvalidTransition {
                    event: event.to_string(),
                    state: state.to_string(),
                },
            }),
        }
    }

    /// Fire `event`, moving the entity to the resolved target.
    ///
    /// Callbacks registered for the target run first, in order, with
    /// `payload`. The first failing callback aborts the trigger and its error
    /// is returned; the entity is written only after all of them succeed.
    pub fn trigger(&mut self, event: &str, payload: &P) -> Result<(), TransitionError<E>> {
        let current = self.entity.state().to_owned();

        let target = match self.validate_transition(event, &current) {
            Ok(target) => target.to_owned(),
            Err(err) => {
                tracing::trace!(event, state = %current, "trigger rejected");
                return Err(err);
            }
        };

        if let Err(error) = self.callbacks.run(&target, payload) {
            tracing::trace!(event, from = %current, to = %target, "transition vetoed by callback");
            return Err(TransitionError::CallbackFailed {
                event: event.to_string(),
                target,
                error,
            });
        }

        tracing::trace!(event, from = %current, to = %target, "transition committed");
        self.entity.set_state(target);
        Ok(())
    }
}

impl<S, P, E> fmt::Debug for StateMachine<'_, S, P, E>
where
    S: Stateful + fmt::Debug + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("entity", &self.entity)
            .field("table", &self.table)
            .field("callbacks", &self.callbacks)
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}
