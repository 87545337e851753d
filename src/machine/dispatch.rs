//! Event dispatch and cursor reset.

use super::{DispatchError, Machine};
use crate::core::{Key, State, TransitionRecord};
use chrono::Utc;
use tracing::debug;

impl<S: Key, E: Key> Machine<S, E> {
    /// Dispatch an event against the current state.
    ///
    /// The event is looked up on the current state. If it exists:
    ///
    /// 1. its action, if bound, is invoked with `(event, current, target)`;
    ///    this happens even when the event loops back to the current state;
    /// 2. if the target differs from the current state, the current state's
    ///    exit action is invoked with the target, then the target's entry
    ///    action is invoked with the current state, then the cursor moves;
    /// 3. for a self-transition no entry or exit action fires.
    ///
    /// Returns the (possibly unchanged) current state.
    ///
    /// Callbacks run inline on the caller's thread and only see shared
    /// references to the machine's states, so a callback cannot dispatch on
    /// the machine that invoked it.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::NoSuchEvent`] if the current state has no event
    ///   with this id. The cursor is left unchanged.
    /// - [`DispatchError::EmptyMachine`] if no state was ever added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use turnstile::{DispatchError, Machine};
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let mut machine: Machine<&str, &str> = Machine::new();
    ///
    /// let sink = Arc::clone(&log);
    /// machine
    ///     .add_state("A")
    ///     .add_event_to("go", "B")?
    ///     .bind_action(move |_, from, to| {
    ///         sink.lock().unwrap().push(format!("{}-->{}", from.id(), to.id()));
    ///     });
    ///
    /// assert_eq!(machine.dispatch(&"go")?.id(), &"B");
    /// assert_eq!(*log.lock().unwrap(), vec!["A-->B"]);
    ///
    /// let err = machine.dispatch(&"go").unwrap_err();
    /// assert!(matches!(err, DispatchError::NoSuchEvent { .. }));
    /// assert_eq!(machine.current_state().unwrap().id(), &"B");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn dispatch(&mut self, event_id: &E) -> Result<&State<S, E>, DispatchError> {
        let from = self.current.clone().ok_or(DispatchError::EmptyMachine)?;
        let to = self.fire(&from, event_id)?;
        let changed = from != to;

        debug!(event = ?event_id, from = ?from, to = ?to, changed, "event dispatched");

        if self.config.record_history {
            self.history.record(TransitionRecord {
                event: event_id.clone(),
                from,
                to: to.clone(),
                timestamp: Utc::now(),
            });
        }

        // Event targets are registered when the event is declared.
        let current = &self.states[&to];
        self.current = Some(to);
        Ok(current)
    }

    /// Put the cursor back on the initial state.
    ///
    /// No callback is invoked. The dispatch history is cleared.
    pub fn reset(&mut self) -> Option<&State<S, E>> {
        if let Some(initial) = &self.initial {
            debug!(state = ?initial, "machine reset");
        }
        self.current = self.initial.clone();
        self.history.clear();
        self.current_state()
    }

    /// Run the callbacks for one dispatch and return the target state id.
    fn fire(&self, from: &S, event_id: &E) -> Result<S, DispatchError> {
        // The cursor and every event target always resolve in the registry.
        let current = &self.states[from];

        let Some(event) = current.event(event_id) else {
            debug!(state = ?from, event = ?event_id, "no such event for current state");
            return Err(DispatchError::NoSuchEvent {
                state: format!("{from:?}"),
                event: format!("{event_id:?}"),
            });
        };
        let target = &self.states[event.target()];

        event.invoke_action(current, target);

        if target.id() != current.id() {
            current.on_exit(target);
            target.on_entry(current);
        }

        Ok(target.id().clone())
    }
}
