//! States: the nodes of a machine and their outgoing events.

use super::event::Event;
use super::key::Key;
use std::collections::BTreeMap;
use std::fmt;

/// Callback invoked when the machine enters a state.
///
/// Receives the state being left.
pub type EntryAction<S, E> = Box<dyn Fn(&State<S, E>) + Send + Sync>;

/// Callback invoked when the machine leaves a state.
///
/// Receives the state being entered.
pub type ExitAction<S, E> = Box<dyn Fn(&State<S, E>) + Send + Sync>;

/// A named node of a state machine.
///
/// States are created and configured through
/// [`Machine::add_state`](crate::Machine::add_state); this type only exposes
/// read-only queries. Every state is owned by exactly one machine.
///
/// # Example
///
/// ```rust
/// use turnstile::Machine;
///
/// let mut machine: Machine<&str, &str> = Machine::new();
/// machine.add_state_with("idle", true).add_event_to("start", "running")?;
///
/// let idle = machine.state(&"idle").unwrap();
/// assert!(idle.is_accepted());
/// assert!(!idle.is_terminal());
/// assert_eq!(idle.event(&"start").unwrap().target(), &"running");
///
/// let running = machine.state(&"running").unwrap();
/// assert!(!running.is_accepted());
/// assert!(running.is_terminal());
/// # Ok::<(), turnstile::BuildError>(())
/// ```
pub struct State<S: Key, E: Key> {
    id: S,
    accepted: bool,
    pub(crate) events: BTreeMap<E, Event<S, E>>,
    pub(crate) entry_action: Option<EntryAction<S, E>>,
    pub(crate) exit_action: Option<ExitAction<S, E>>,
}

impl<S: Key, E: Key> State<S, E> {
    pub(crate) fn new(id: S, accepted: bool) -> Self {
        Self {
            id,
            accepted,
            events: BTreeMap::new(),
            entry_action: None,
            exit_action: None,
        }
    }

    /// The state id, unique within the owning machine.
    pub fn id(&self) -> &S {
        &self.id
    }

    /// Caller-defined "accepting" flag. The engine never reads it.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// True if the state has no outgoing events.
    pub fn is_terminal(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an outgoing event by id.
    pub fn event(&self, id: &E) -> Option<&Event<S, E>> {
        self.events.get(id)
    }

    /// Outgoing events in ascending id order.
    pub fn events(&self) -> impl Iterator<Item = &Event<S, E>> {
        self.events.values()
    }

    /// Number of outgoing events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Whether an entry action is bound.
    pub fn has_entry_action(&self) -> bool {
        self.entry_action.is_some()
    }

    /// Whether an exit action is bound.
    pub fn has_exit_action(&self) -> bool {
        self.exit_action.is_some()
    }

    pub(crate) fn on_entry(&self, leaving: &State<S, E>) {
        if let Some(action) = &self.entry_action {
            action(leaving);
        }
    }

    pub(crate) fn on_exit(&self, entering: &State<S, E>) {
        if let Some(action) = &self.exit_action {
            action(entering);
        }
    }
}

impl<S: Key, E: Key> fmt::Debug for State<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("accepted", &self.accepted)
            .field("events", &self.events.values().collect::<Vec<_>>())
            .field("has_entry_action", &self.has_entry_action())
            .field("has_exit_action", &self.has_exit_action())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn state_with_events(
        id: &'static str,
        events: &[(&'static str, &'static str)],
    ) -> State<&'static str, &'static str> {
        let mut state = State::new(id, false);
        for &(event, target) in events {
            state.events.insert(event, Event::new(event, id, target));
        }
        state
    }

    #[test]
    fn new_state_is_terminal() {
        let state: State<&str, &str> = State::new("radio", false);

        assert_eq!(state.id(), &"radio");
        assert!(state.is_terminal());
        assert!(!state.is_accepted());
        assert!(!state.has_entry_action());
        assert!(!state.has_exit_action());
        assert_eq!(state.event_count(), 0);
    }

    #[test]
    fn state_with_events_is_not_terminal() {
        let state = state_with_events("radio", &[("next", "radio"), ("switch_cd", "cdplayer")]);

        assert!(!state.is_terminal());
        assert_eq!(state.event_count(), 2);
        assert_eq!(state.event(&"switch_cd").unwrap().target(), &"cdplayer");
        assert!(state.event(&"missing").is_none());
    }

    #[test]
    fn events_iterate_in_id_order() {
        let state = state_with_events(
            "radio",
            &[("switch_cd", "cdplayer"), ("next", "radio"), ("previous", "radio")],
        );

        let ids: Vec<_> = state.events().map(|e| *e.id()).collect();
        assert_eq!(ids, vec!["next", "previous", "switch_cd"]);
    }

    #[test]
    fn hooks_receive_the_other_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut radio: State<&str, &str> = State::new("radio", false);
        let cd: State<&str, &str> = State::new("cdplayer", false);

        let log = Arc::clone(&seen);
        radio.entry_action = Some(Box::new(move |leaving| {
            log.lock().unwrap().push(format!("enter radio from {}", leaving.id()));
        }));
        let log = Arc::clone(&seen);
        radio.exit_action = Some(Box::new(move |entering| {
            log.lock().unwrap().push(format!("exit radio to {}", entering.id()));
        }));

        radio.on_exit(&cd);
        radio.on_entry(&cd);

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["exit radio to cdplayer", "enter radio from cdplayer"]
        );
    }

    #[test]
    fn unbound_hooks_are_noops() {
        let radio: State<&str, &str> = State::new("radio", true);
        let cd: State<&str, &str> = State::new("cdplayer", false);

        radio.on_entry(&cd);
        radio.on_exit(&cd);
        assert!(radio.is_accepted());
    }
}
