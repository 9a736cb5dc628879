//! Transition tables: which state each event moves the entity to.
//!
//! A [`TransitionMap`] holds the source → target edges of one event, and a
//! [`TransitionTable`] holds one map per event name. Both are plain data and
//! can be (de)serialized, so a host may declare its table in a config file.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Source → target edges for a single event.
///
/// Each source state maps to at most one target. The empty target is
/// reserved and means "no transition from this source".
///
/// # Example
///
/// ```rust
/// use event_fsm::core::TransitionMap;
///
/// let map = TransitionMap::from([("pending", "approved"), ("draft", "")]);
///
/// assert_eq!(map.target("pending"), Some("approved"));
/// assert_eq!(map.target("draft"), None);
/// assert_eq!(map.target("archived"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionMap {
    edges: BTreeMap<String, String>,
}

impl TransitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the edge out of `from`, returning the previous target.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> Option<String> {
        self.edges.insert(from.into(), to.into())
    }

    /// Chainable form of [`insert`](Self::insert).
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    /// Target reached from `from`, or `None` when the source is absent or
    /// maps to the reserved empty identifier.
    pub fn target(&self, from: &str) -> Option<&str> {
        self.edges
            .get(from)
            .map(String::as_str)
            .filter(|to| !to.is_empty())
    }

    /// Whether `from` has a usable (non-empty) target.
    pub fn contains(&self, from: &str) -> bool {
        self.target(from).is_some()
    }

    /// All non-empty targets, in source order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.edges
            .values()
            .map(String::as_str)
            .filter(|to| !to.is_empty())
    }

    /// Raw edges in source order, including reserved empty targets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TransitionMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            edges: iter
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for TransitionMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(edges: [(K, V); N]) -> Self {
        edges.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TransitionMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Outcome of looking an event and a source state up in a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The event was never registered.
    UnknownEvent,
    /// The event is known but has no usable edge out of the state.
    NoTarget,
    /// The state the entity would move to.
    Target(&'a str),
}

/// Event name → [`TransitionMap`].
///
/// Registering an event a second time replaces its whole map; edges are
/// never merged.
///
/// # Example
///
/// ```rust
/// use event_fsm::core::{Resolution, TransitionMap, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.insert("approve", TransitionMap::from([("pending", "approved")]));
///
/// assert_eq!(table.resolve("approve", "pending"), Resolution::Target("approved"));
/// assert_eq!(table.resolve("approve", "approved"), Resolution::NoTarget);
/// assert_eq!(table.resolve("reject", "pending"), Resolution::UnknownEvent);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    events: BTreeMap<String, TransitionMap>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `map` for `event`, returning the map it replaced.
    pub fn insert(&mut self, event: impl Into<String>, map: TransitionMap) -> Option<TransitionMap> {
        self.events.insert(event.into(), map)
    }

    pub fn get(&self, event: &str) -> Option<&TransitionMap> {
        self.events.get(event)
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Resolve the target of `event` when the entity is in `state`.
    pub fn resolve(&self, event: &str, state: &str) -> Resolution<'_> {
        match self.events.get(event) {
            None => Resolution::UnknownEvent,
            Some(map) => map
                .target(state)
                .map_or(Resolution::NoTarget, Resolution::Target),
        }
    }

    /// Registered event names, sorted.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Events with a usable edge out of `state`, sorted.
    pub fn events_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.events
            .iter()
            .filter(move |(_, map)| map.contains(state))
            .map(|(event, _)| event.as_str())
    }

    /// Whether any event targets `state`.
    pub fn is_target(&self, state: &str) -> bool {
        self.events
            .values()
            .any(|map| map.targets().any(|to| to == state))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TransitionMap)> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = (K, TransitionMap)>>(iter: I) -> Self {
        Self {
            events: iter
                .into_iter()
                .map(|(event, map)| (event.into(), map))
                .collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, TransitionMap)> for TransitionTable {
    /// Register each event, replacing maps already present.
    fn extend<I: IntoIterator<Item = (K, TransitionMap)>>(&mut self, iter: I) {
        for (event, map) in iter {
            self.insert(event, map);
        }
    }
}

impl IntoIterator for TransitionTable {
    type Item = (String, TransitionMap);
    type IntoIter = btree_map::IntoIter<String, TransitionMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_table() -> TransitionTable {
        [
            (
                "approve",
                TransitionMap::from([("pending", "approved"), ("escalated", "approved")]),
            ),
            ("reject", TransitionMap::from([("pending", "rejected")])),
            ("escalate", TransitionMap::from([("pending", "escalated")])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_target_is_not_a_transition() {
        let map = TransitionMap::new().with("a", "").with("b", "c");

        assert_eq!(map.target("a"), None);
        assert!(!map.contains("a"));
        assert_eq!(map.target("b"), Some("c"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.targets().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn insert_replaces_edge_for_same_source() {
        let mut map = TransitionMap::new();
        assert_eq!(map.insert("pending", "approved"), None);
        assert_eq!(
            map.insert("pending", "archived"),
            Some("approved".to_string())
        );
        assert_eq!(map.target("pending"), Some("archived"));
    }

    #[test]
    fn iteration_yields_raw_edges_in_source_order() {
        let map = TransitionMap::from([
            ("pending", "approved"),
            ("draft", ""),
            ("escalated", "approved"),
        ]);

        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("draft", ""), ("escalated", "approved"), ("pending", "approved")]
        );

        let mut sources = Vec::new();
        for (from, to) in &map {
            if to.is_empty() {
                continue;
            }
            sources.push(from.as_str());
        }
        assert_eq!(sources, vec!["escalated", "pending"]);
    }

    #[test]
    fn extend_moves_maps_in_and_replaces_events() {
        let mut table = TransitionTable::new();
        table.insert("approve", TransitionMap::from([("pending", "escalated")]));
        table.insert("escalate", TransitionMap::from([("pending", "escalated")]));

        table.extend(review_table());

        assert_eq!(table.len(), 4);
        assert_eq!(
            table.resolve("approve", "pending"),
            Resolution::Target("approved")
        );
        assert_eq!(
            table.resolve("escalate", "pending"),
            Resolution::Target("escalated")
        );
    }

    #[test]
    fn owned_iteration_yields_events_sorted() {
        let events: Vec<(String, usize)> = review_table()
            .into_iter()
            .map(|(event, map)| (event, map.len()))
            .collect();

        assert_eq!(
            events,
            vec![
                ("approve".to_string(), 2),
                ("escalate".to_string(), 1),
                ("reject".to_string(), 1),
            ]
        );
    }

    #[test]
    fn table_insert_replaces_whole_map() {
        let mut table = TransitionTable::new();
        table.insert("approve", TransitionMap::from([("pending", "approved")]));
        let previous = table.insert("approve", TransitionMap::from([("draft", "pending")]));

        assert!(previous.is_some());
        assert_eq!(table.resolve("approve", "pending"), Resolution::NoTarget);
        assert_eq!(
            table.resolve("approve", "draft"),
            Resolution::Target("pending")
        );
    }

    #[test]
    fn resolve_distinguishes_unknown_event_from_missing_edge() {
        let table = review_table();

        assert_eq!(
            table.resolve("approve", "pending"),
            Resolution::Target("approved")
        );
        assert_eq!(table.resolve("approve", "rejected"), Resolution::NoTarget);
        assert_eq!(table.resolve("archive", "pending"), Resolution::UnknownEvent);
    }

    #[test]
    fn events_from_lists_usable_events_sorted() {
        let table = review_table();

        assert_eq!(
            table.events_from("pending").collect::<Vec<_>>(),
            vec!["approve", "escalate", "reject"]
        );
        assert_eq!(
            table.events_from("escalated").collect::<Vec<_>>(),
            vec!["approve"]
        );
        assert_eq!(table.events_from("approved").count(), 0);
    }

    #[test]
    fn is_target_ignores_empty_targets() {
        let mut table = review_table();
        table.insert("noop", TransitionMap::from([("approved", "")]));

        assert!(table.is_target("approved"));
        assert!(table.is_target("escalated"));
        assert!(!table.is_target("pending"));
        assert!(!table.is_target(""));
    }

    #[test]
    fn table_deserializes_from_nested_json_objects() {
        let json = r#"{
            "approve": { "pending": "approved" },
            "reject": { "pending": "rejected", "approved": "" }
        }"#;

        let table: TransitionTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.resolve("reject", "pending"),
            Resolution::Target("rejected")
        );
        assert_eq!(table.resolve("reject", "approved"), Resolution::NoTarget);
    }

    #[test]
    fn table_serializes_as_plain_maps() {
        let table = review_table();
        let value = serde_json::to_value(&table).unwrap();

        assert_eq!(value["reject"]["pending"], "rejected");
        assert_eq!(value["approve"]["escalated"], "approved");
    }
}
