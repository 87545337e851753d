//! Outgoing edges of a state.

use super::key::Key;
use super::state::State;
use std::fmt;

/// Callback invoked on every dispatch of an event.
///
/// Receives the event, the source state and the target state, in that order.
/// For a self-transition source and target are the same state.
pub type EventAction<S, E> = Box<dyn Fn(&Event<S, E>, &State<S, E>, &State<S, E>) + Send + Sync>;

/// A named edge from one state to another.
///
/// The target is stored as a state id and resolved through the owning
/// machine when the event is dispatched, so an event never holds a reference
/// into the registry.
pub struct Event<S: Key, E: Key> {
    pub(crate) id: E,
    pub(crate) target: S,
    pub(crate) action: Option<EventAction<S, E>>,
    source: S,
}

impl<S: Key, E: Key> Event<S, E> {
    pub(crate) fn new(id: E, source: S, target: S) -> Self {
        Self {
            id,
            target,
            action: None,
            source,
        }
    }

    /// The event id, unique within the owning state.
    pub fn id(&self) -> &E {
        &self.id
    }

    /// Id of the state this event transitions to.
    pub fn target(&self) -> &S {
        &self.target
    }

    /// Id of the state that declares this event.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// True if dispatching this event leaves the cursor where it is.
    pub fn is_self_transition(&self) -> bool {
        self.source == self.target
    }

    /// True if an action callback is bound.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub(crate) fn invoke_action(&self, source: &State<S, E>, target: &State<S, E>) {
        if let Some(action) = &self.action {
            action(self, source, target);
        }
    }
}

impl<S: Key, E: Key> fmt::Debug for Event<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("has_action", &self.has_action())
            .finish()
    }
}
