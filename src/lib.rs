//! Turnstile: an embeddable finite state machine engine
//!
//! A host application declares named states, the named events each state
//! accepts, the target of each event and optional hooks, then dispatches
//! events one at a time against a single current-state cursor. Everything
//! runs synchronously on the caller's thread.
//!
//! # Core Concepts
//!
//! - **State**: A named node with an `accepted` flag and optional entry/exit hooks
//! - **Event**: A named edge from a state to a target state, with an optional action hook
//! - **Machine**: Owns the states, tracks the initial and current state, dispatches events
//! - **State table**: A diagnostic dump of the whole graph
//!
//! # Hook Order
//!
//! For a dispatched event the action fires first, always. Only if the target
//! differs from the current state does the current state's exit hook fire,
//! then the target's entry hook, and then the cursor moves.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use turnstile::Machine;
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let mut player: Machine<&str, &str> = Machine::new();
//!
//! let sink = Arc::clone(&log);
//! player
//!     .add_state("radio")
//!     .bind_exit_action(move |entering| {
//!         sink.lock().unwrap().push(format!("leaving radio for {}", entering.id()));
//!     })
//!     .add_event_to("switch_cd", "cdplayer")?;
//! player.add_state("radio").add_event("next")?;
//! player.add_state("cdplayer").add_event_to("switch_radio", "radio")?;
//!
//! player.dispatch(&"next")?;
//! assert_eq!(player.current_state().unwrap().id(), &"radio");
//!
//! player.dispatch(&"switch_cd")?;
//! assert_eq!(player.current_state().unwrap().id(), &"cdplayer");
//! assert_eq!(*log.lock().unwrap(), vec!["leaving radio for cdplayer"]);
//!
//! player.reset();
//! assert_eq!(player.current_state().unwrap().id(), &"radio");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{BuildError, EventBuilder, StateBuilder};
pub use crate::core::{Event, Key, State, StateHistory, TransitionRecord};
pub use crate::machine::{DispatchError, Machine, MachineConfig};
pub use crate::table::{StateTable, TableRow};
