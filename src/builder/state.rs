//! Fluent handle for configuring a state.

use crate::builder::error::BuildError;
use crate::builder::event::EventBuilder;
use crate::core::{Event, Key, State};
use crate::machine::Machine;
use tracing::{trace, warn};

/// Builder for one state of a machine, returned by
/// [`Machine::add_state`].
///
/// The handle mutably borrows the machine, so hooks and events can be chained
/// off a single `add_state` call:
///
/// ```rust
/// use turnstile::Machine;
///
/// let mut machine: Machine<&str, &str> = Machine::new();
/// machine
///     .add_state("radio")
///     .bind_entry_action(|leaving| println!("radio <- {}", leaving.id()))
///     .bind_exit_action(|entering| println!("radio -> {}", entering.id()))
///     .add_event("switch_radio")?;
///
/// let radio = machine.state(&"radio").unwrap();
/// assert!(radio.has_entry_action());
/// assert!(radio.has_exit_action());
/// assert!(radio.event(&"switch_radio").unwrap().is_self_transition());
/// # Ok::<(), turnstile::BuildError>(())
/// ```
pub struct StateBuilder<'m, S: Key, E: Key> {
    machine: &'m mut Machine<S, E>,
    id: S,
}

impl<'m, S: Key, E: Key> StateBuilder<'m, S, E> {
    pub(crate) fn new(machine: &'m mut Machine<S, E>, id: S) -> Self {
        Self { machine, id }
    }

    /// Id of the state being configured.
    pub fn id(&self) -> &S {
        &self.id
    }

    /// The state being configured.
    pub fn state(&self) -> &State<S, E> {
        &self.machine.states[&self.id]
    }

    /// Set the callback invoked when the machine enters this state.
    ///
    /// The callback receives the state being left. Rebinding replaces the
    /// previous callback.
    pub fn bind_entry_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&State<S, E>) + Send + Sync + 'static,
    {
        self.node().entry_action = Some(Box::new(action));
        self
    }

    /// Set the callback invoked when the machine leaves this state.
    ///
    /// The callback receives the state being entered. Rebinding replaces the
    /// previous callback.
    pub fn bind_exit_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&State<S, E>) + Send + Sync + 'static,
    {
        self.node().exit_action = Some(Box::new(action));
        self
    }

    /// Declare an event that transitions back to this same state.
    ///
    /// Dispatching it fires the event's action but no entry or exit action.
    ///
    /// # Errors
    ///
    /// [`BuildError::DuplicateEvent`] if the state already has an event
    /// with this id; the existing event is left untouched.
    pub fn add_event(self, id: E) -> Result<EventBuilder<'m, S, E>, BuildError> {
        let target = self.id.clone();
        self.insert_event(id, target)
    }

    /// Declare an event that transitions to `next`, creating `next` as a
    /// non-accepting state if it does not exist yet.
    ///
    /// # Errors
    ///
    /// [`BuildError::DuplicateEvent`] if the state already has an event
    /// with this id.
    pub fn add_event_to(self, id: E, next: S) -> Result<EventBuilder<'m, S, E>, BuildError> {
        self.add_event_to_with(id, next, false)
    }

    /// Declare an event that transitions to `next`, creating `next` with the
    /// given accepted flag if it does not exist yet.
    ///
    /// An existing `next` keeps its accepted flag. The target state is
    /// ensured before the duplicate check, so it exists afterwards even
    /// when the event is rejected.
    ///
    /// # Errors
    ///
    /// [`BuildError::DuplicateEvent`] if the state already has an event
    /// with this id.
    pub fn add_event_to_with(
        self,
        id: E,
        next: S,
        accepted: bool,
    ) -> Result<EventBuilder<'m, S, E>, BuildError> {
        self.machine.state_entry(next.clone(), accepted);
        self.insert_event(id, next)
    }

    fn node(&mut self) -> &mut State<S, E> {
        self.machine.state_entry(self.id.clone(), false)
    }

    fn insert_event(self, id: E, target: S) -> Result<EventBuilder<'m, S, E>, BuildError> {
        let Self { machine, id: state } = self;
        let node = machine.state_entry(state.clone(), false);

        if node.events.contains_key(&id) {
            warn!(state = ?state, event = ?id, "duplicate event declaration rejected");
            return Err(BuildError::DuplicateEvent {
                state: format!("{state:?}"),
                event: format!("{id:?}"),
            });
        }

        trace!(state = ?state, event = ?id, target = ?target, "event created");
        node.events
            .insert(id.clone(), Event::new(id.clone(), state.clone(), target));
        Ok(EventBuilder::new(machine, state, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn add_event_targets_declaring_state() {
        let mut machine: Machine<&str, &str> = Machine::new();
        let event = machine.add_state("radio").add_event("next").unwrap();

        assert_eq!(event.event().target(), &"radio");
        assert!(event.event().is_self_transition());
    }

    #[test]
    fn add_event_to_creates_missing_target() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine
            .add_state("radio")
            .add_event_to("switch_cd", "cdplayer")
            .unwrap();

        let cd = machine.state(&"cdplayer").unwrap();
        assert!(!cd.is_accepted());
        assert!(cd.is_terminal());
        assert_eq!(machine.len(), 2);
    }

    #[test]
    fn add_event_to_with_sets_accepted_on_new_target() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine
            .add_state("idle")
            .add_event_to_with("finish", "done", true)
            .unwrap();

        assert!(machine.state(&"done").unwrap().is_accepted());
    }

    #[test]
    fn add_event_to_with_keeps_existing_accepted_flag() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine.add_state("idle");
        machine.add_state("done");
        machine
            .add_state("idle")
            .add_event_to_with("finish", "done", true)
            .unwrap();

        assert!(!machine.state(&"done").unwrap().is_accepted());
    }

    #[test]
    fn duplicate_event_is_rejected() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine
            .add_state("radio")
            .add_event_to("switch", "cdplayer")
            .unwrap()
            .bind_action(|_, _, _| {});

        let result = machine.add_state("radio").add_event_to("switch", "tape");

        assert!(matches!(
            result,
            Err(BuildError::DuplicateEvent { ref state, ref event })
                if state == r#""radio""# && event == r#""switch""#
        ));
        let event = machine.state(&"radio").unwrap().event(&"switch").unwrap();
        assert_eq!(event.target(), &"cdplayer");
        assert!(event.has_action());
    }

    #[test]
    fn duplicate_self_loop_is_rejected() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine.add_state("radio").add_event("next").unwrap();

        assert!(machine.add_state("radio").add_event("next").is_err());
        assert_eq!(machine.state(&"radio").unwrap().event_count(), 1);
    }

    #[test]
    fn rejected_duplicate_still_ensures_target() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine.add_state("radio").add_event("switch").unwrap();

        assert!(machine
            .add_state("radio")
            .add_event_to("switch", "tape")
            .is_err());
        assert!(machine.state(&"tape").is_some());
    }

    #[test]
    fn same_event_id_on_different_states_is_allowed() {
        let mut machine: Machine<&str, &str> = Machine::new();
        machine.add_state("radio").add_event("next").unwrap();
        machine.add_state("cdplayer").add_event("next").unwrap();

        assert!(machine.state(&"radio").unwrap().event(&"next").is_some());
        assert!(machine.state(&"cdplayer").unwrap().event(&"next").is_some());
    }

    #[test]
    fn rebinding_hooks_replaces_them() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut machine: Machine<&str, &str> = Machine::new();

        let first = Arc::clone(&calls);
        let second = Arc::clone(&calls);
        machine
            .add_state("radio")
            .bind_exit_action(move |_| first.lock().unwrap().push("first"))
            .bind_exit_action(move |_| second.lock().unwrap().push("second"))
            .add_event_to("switch_cd", "cdplayer")
            .unwrap();

        machine.dispatch(&"switch_cd").unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["second"]);
    }

    #[test]
    fn builder_exposes_state() {
        let mut machine: Machine<&str, &str> = Machine::new();
        let builder = machine.add_state_with("radio", true);

        assert_eq!(builder.id(), &"radio");
        assert!(builder.state().is_accepted());
        assert!(builder.state().is_terminal());
    }
}
