//! Macros for declaring transition maps and tables.

/// Build a [`TransitionMap`](crate::core::TransitionMap) from `from => to`
/// pairs.
///
/// # Example
///
/// ```
/// use event_fsm::transitions;
///
/// let map = transitions! {
///     "pending" => "approved",
///     "escalated" => "approved",
/// };
///
/// assert_eq!(map.target("escalated"), Some("approved"));
/// ```
#[macro_export]
macro_rules! transitions {
    () => {
        $crate::core::TransitionMap::new()
    };
    ($($from:expr => $to:expr),+ $(,)?) => {{
        let mut map = $crate::core::TransitionMap::new();
        $(
            map.insert($from, $to);
        )+
        map
    }};
}

/// Build a [`TransitionTable`](crate::core::TransitionTable) with one block
/// of `from => to` pairs per event.
///
/// # Example
///
/// ```
/// use event_fsm::transition_table;
///
/// let table = transition_table! {
///     "approve" => { "pending" => "approved" },
///     "reject" => { "pending" => "rejected", "approved" => "rejected" },
/// };
///
/// assert_eq!(table.len(), 2);
/// assert!(table.is_target("rejected"));
/// ```
#[macro_export]
macro_rules! transition_table {
    ($($event:expr => { $($from:expr => $to:expr),* $(,)? }),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::TransitionTable::new();
        $(
            table.insert($event, $crate::transitions!($($from => $to),*));
        )*
        table
    }};
}
