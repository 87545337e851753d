//! Dispatch history tracking.
//!
//! A machine configured with `record_history` appends one record per
//! successful dispatch. The history is an in-memory log for diagnostics; it
//! is never replayed and is cleared by [`Machine::reset`](crate::Machine::reset).

use super::key::Key;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single dispatched event.
///
/// `from` and `to` are equal for a self-transition.
///
/// # Example
///
/// ```rust
/// use turnstile::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     event: "switch_cd",
///     from: "radio",
///     to: "cdplayer",
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "S: Serialize, E: Serialize"))]
pub struct TransitionRecord<S: Key, E: Key> {
    /// The dispatched event
    pub event: E,
    /// The state the event was dispatched against
    pub from: S,
    /// The state the machine ended up in
    pub to: S,
    /// When the dispatch completed
    pub timestamp: DateTime<Utc>,
}

impl<S: Key, E: Key> TransitionRecord<S, E> {
    /// True if the dispatch moved the cursor.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, optionally bounded log of dispatches.
///
/// When a capacity is set and the log is full, recording a new entry evicts
/// the oldest one.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(Some(2));
/// for (event, from, to) in [("a", "s0", "s1"), ("b", "s1", "s2"), ("c", "s2", "s3")] {
///     history.record(TransitionRecord { event, from, to, timestamp: Utc::now() });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&"s1", &"s2", &"s3"]);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound(serialize = "S: Serialize, E: Serialize"))]
pub struct StateHistory<S: Key, E: Key> {
    transitions: VecDeque<TransitionRecord<S, E>>,
    capacity: Option<usize>,
}

impl<S: Key, E: Key> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Key, E: Key> StateHistory<S, E> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// Create an empty history that keeps at most `capacity` records.
    ///
    /// `None` means unbounded. A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity,
        }
    }

    /// Maximum number of retained records, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a record, evicting the oldest one if the history is full.
    pub fn record(&mut self, transition: TransitionRecord<S, E>) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.transitions.len() >= capacity {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record. Self-transitions repeat a state.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// Retained records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord<S, E>> {
        self.transitions.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<S, E>> {
        self.transitions.back()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop every record, keeping the capacity.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
