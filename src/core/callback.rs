//! Callbacks attached to target states.
//!
//! Callbacks act as guarded side effects: they run before a transition
//! commits and any one of them can veto it by returning an error.

use std::collections::HashMap;
use std::fmt;

/// Boxed callback run with the trigger payload before a transition commits.
pub type Callback<P, E> = Box<dyn FnMut(&P) -> Result<(), E> + Send>;

/// Target state → callbacks, kept in registration order.
pub struct CallbackRegistry<P, E> {
    callbacks: HashMap<String, Vec<Callback<P, E>>>,
}

impl<P, E> CallbackRegistry<P, E> {
    pub fn new() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }

    /// Append `callback` to the list for `state`.
    pub fn register<F>(&mut self, state: impl Into<String>, callback: F)
    where
        F: FnMut(&P) -> Result<(), E> + Send + 'static,
    {
        self.callbacks
            .entry(state.into())
            .or_default()
            .push(Box::new(callback));
    }

    /// Run every callback for `state` in order, stopping at the first error.
    pub fn run(&mut self, state: &str, payload: &P) -> Result<(), E> {
        let Some(callbacks) = self.callbacks.get_mut(state) else {
            return Ok(());
        };

        for (index, callback) in callbacks.iter_mut().enumerate() {
            tracing::trace!(state, index, "running callback");
            callback(payload)?;
        }
        Ok(())
    }

    /// Number of callbacks registered for `state`.
    pub fn count(&self, state: &str) -> usize {
        self.callbacks.get(state).map_or(0, Vec::len)
    }

    /// States that have at least one callback.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<P, E> Default for CallbackRegistry<P, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, E> fmt::Debug for CallbackRegistry<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.callbacks.iter().map(|(state, list)| (state, list.len())))
            .finish()
    }
}
