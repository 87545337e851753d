//! Fluent handle for configuring an event.

use crate::builder::state::StateBuilder;
use crate::core::{Event, Key, State};
use crate::machine::Machine;

/// Builder for one event, returned by the `add_event*` methods of
/// [`StateBuilder`].
pub struct EventBuilder<'m, S: Key, E: Key> {
    machine: &'m mut Machine<S, E>,
    state: S,
    id: E,
}

impl<'m, S: Key, E: Key> EventBuilder<'m, S, E> {
    pub(crate) fn new(machine: &'m mut Machine<S, E>, state: S, id: E) -> Self {
        Self { machine, state, id }
    }

    /// Id of the event being configured.
    pub fn id(&self) -> &E {
        &self.id
    }

    /// The event being configured.
    pub fn event(&self) -> &Event<S, E> {
        &self.machine.states[&self.state].events[&self.id]
    }

    /// Set the callback invoked every time this event is dispatched.
    ///
    /// The callback receives the event, the source state and the target
    /// state. Rebinding silently replaces the previous callback.
    pub fn bind_action<F>(self, action: F) -> Self
    where
        F: Fn(&Event<S, E>, &State<S, E>, &State<S, E>) + Send + Sync + 'static,
    {
        let node = self.machine.state_entry(self.state.clone(), false);
        if let Some(event) = node.events.get_mut(&self.id) {
            event.action = Some(Box::new(action));
        }
        self
    }

    /// Go back to the declaring state to keep chaining.
    ///
    /// ```rust
    /// use turnstile::Machine;
    ///
    /// let mut machine: Machine<&str, &str> = Machine::new();
    /// machine
    ///     .add_state("radio")
    ///     .add_event("next")?
    ///     .bind_action(|_, _, _| {})
    ///     .into_state()
    ///     .add_event_to("switch_cd", "cdplayer")?;
    ///
    /// assert_eq!(machine.state(&"radio").unwrap().event_count(), 2);
    /// # Ok::<(), turnstile::BuildError>(())
    /// ```
    pub fn into_state(self) -> StateBuilder<'m, S, E> {
        StateBuilder::new(self.machine, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn new_event_has_no_action() {
        let mut machine: Machine<&str, &str> = Machine::new();
        let event = machine.add_state("radio").add_event("next").unwrap();

        assert_eq!(event.id(), &"next");
        assert!(!event.event().has_action());
    }

    #[test]
    fn bind_action_marks_event() {
        let mut machine: Machine<&str, &str> = Machine::new();
        let event = machine
            .add_state("radio")
            .add_event("next")
            .unwrap()
            .bind_action(|_, _, _| {});

        assert!(event.event().has_action());
    }

    #[test]
    fn rebinding_action_replaces_it() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut machine: Machine<&str, &str> = Machine::new();

        let (a, b) = (Arc::clone(&first), Arc::clone(&second));
        machine
            .add_state("radio")
            .add_event("next")
            .unwrap()
            .bind_action(move |_, _, _| {
                a.fetch_add(1, Ordering::SeqCst);
            })
            .bind_action(move |_, _, _| {
                b.fetch_add(1, Ordering::SeqCst);
            });

        machine.dispatch(&"next").unwrap();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn into_state_continues_the_chain() {
        let mut machine: Machine<&str, &str> = Machine::new();
        let state = machine
            .add_state("radio")
            .add_event("next")
            .unwrap()
            .into_state();

        assert_eq!(state.id(), &"radio");
        assert_eq!(state.state().event_count(), 1);
    }
}
