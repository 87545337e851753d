//! The state machine: state registry, cursor and dispatch.
//!
//! A [`Machine`] owns every [`State`] it knows about, keyed by state id.
//! Events refer to their target by id, and the machine resolves those ids
//! when an event is dispatched. The first state ever added becomes both the
//! initial and the current state.

mod config;
mod dispatch;
mod error;

pub use config::MachineConfig;
pub use error::DispatchError;

use crate::builder::StateBuilder;
use crate::core::{Key, State, StateHistory};
use crate::table::StateTable;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// A finite state machine over state ids `S` and event ids `E`.
///
/// # Example
///
/// ```rust
/// use turnstile::Machine;
///
/// let mut machine: Machine<&str, &str> = Machine::new();
/// machine.add_state("radio").add_event_to("switch_cd", "cdplayer")?;
/// machine.add_state("cdplayer").add_event_to("switch_radio", "radio")?;
///
/// assert_eq!(machine.current_state().unwrap().id(), &"radio");
/// assert_eq!(machine.dispatch(&"switch_cd")?.id(), &"cdplayer");
/// assert_eq!(machine.reset().unwrap().id(), &"radio");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Machine<S: Key, E: Key> {
    pub(crate) states: BTreeMap<S, State<S, E>>,
    initial: Option<S>,
    pub(crate) current: Option<S>,
    pub(crate) history: StateHistory<S, E>,
    config: MachineConfig,
}

impl<S: Key, E: Key> Machine<S, E> {
    /// Create an empty machine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create an empty machine with the given configuration.
    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            states: BTreeMap::new(),
            initial: None,
            current: None,
            history: StateHistory::with_capacity(config.history_capacity),
            config,
        }
    }

    /// Configuration the machine was created with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get or create a non-accepting state and return a builder for it.
    ///
    /// See [`add_state_with`](Self::add_state_with).
    pub fn add_state(&mut self, id: S) -> StateBuilder<'_, S, E> {
        self.add_state_with(id, false)
    }

    /// Get or create a state and return a builder for it.
    ///
    /// If a state with `id` already exists it is returned unchanged; in
    /// particular its accepted flag is not updated. The first state ever
    /// added becomes both the initial and the current state.
    pub fn add_state_with(&mut self, id: S, accepted: bool) -> StateBuilder<'_, S, E> {
        self.state_entry(id.clone(), accepted);
        StateBuilder::new(self, id)
    }

    /// Look up a state by id.
    pub fn state(&self, id: &S) -> Option<&State<S, E>> {
        self.states.get(id)
    }

    /// All states in ascending id order.
    pub fn states(&self) -> impl Iterator<Item = &State<S, E>> {
        self.states.values()
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True until the first state is added.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state the cursor points at; `None` only before any state is added.
    pub fn current_state(&self) -> Option<&State<S, E>> {
        self.current.as_ref().and_then(|id| self.states.get(id))
    }

    /// The first state ever added; `None` only before any state is added.
    pub fn initial_state(&self) -> Option<&State<S, E>> {
        self.initial.as_ref().and_then(|id| self.states.get(id))
    }

    /// Dispatch history. Empty unless the machine was configured with
    /// `record_history`.
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Tabular dump of every state and its outgoing events.
    pub fn state_table(&self) -> StateTable
    where
        S: fmt::Display,
        E: fmt::Display,
    {
        StateTable::from_machine(self)
    }

    /// Get-or-create primitive behind every builder call.
    pub(crate) fn state_entry(&mut self, id: S, accepted: bool) -> &mut State<S, E> {
        if self.initial.is_none() {
            debug!(state = ?id, "initial state set");
            self.initial = Some(id.clone());
            self.current = Some(id.clone());
        }
        self.states.entry(id).or_insert_with_key(|id| {
            trace!(state = ?id, accepted, "state created");
            State::new(id.clone(), accepted)
        })
    }
}

impl<S: Key, E: Key> Default for Machine<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Key, E: Key> fmt::Debug for Machine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("states", &self.states.values().collect::<Vec<_>>())
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("config", &self.config)
            .finish()
    }
}
