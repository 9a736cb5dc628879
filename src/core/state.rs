//! The `Stateful` capability implemented by values a machine drives.
//!
//! A stateful entity is pure data: it reports its current state identifier
//! and stores a new one when told to. Validation of the new value is the
//! machine's job, never the entity's.

/// Capability of a host value whose state a [`StateMachine`] drives.
///
/// Any type can participate by exposing its state identifier. The machine
/// reads it at the start of every trigger and writes it back only after a
/// transition has fully succeeded.
///
/// # Example
///
/// ```rust
/// use event_fsm::core::Stateful;
///
/// struct Order {
///     id: u64,
///     status: String,
/// }
///
/// impl Stateful for Order {
///     fn state(&self) -> &str {
///         &self.status
///     }
///
///     fn set_state(&mut self, state: String) {
///         self.status = state;
///     }
/// }
///
/// let mut order = Order { id: 7, status: "pending".to_string() };
/// order.set_state("approved".to_string());
/// assert_eq!(order.state(), "approved");
/// assert_eq!(order.id, 7);
/// ```
///
/// [`StateMachine`]: crate::machine::StateMachine
pub trait Stateful {
    /// Current state identifier.
    fn state(&self) -> &str;

    /// Overwrite the state identifier. Must not trigger any machine logic.
    fn set_state(&mut self, state: String);
}

impl Stateful for String {
    fn state(&self) -> &str {
        self.as_str()
    }

    fn set_state(&mut self, state: String) {
        *self = state;
    }
}

impl<T: Stateful + ?Sized> Stateful for Box<T> {
    fn state(&self) -> &str {
        (**self).state()
    }

    fn set_state(&mut self, state: String) {
        (**self).set_state(state)
    }
}
