//! Core graph model of the state machine.
//!
//! This module contains the node and edge types the machine is built from:
//! - Identifier bound via the `Key` trait
//! - States with optional entry/exit hooks
//! - Events with optional action hooks
//! - Dispatch history records
//!
//! States and events are created only through the builder API on
//! [`Machine`](crate::Machine); the types here expose read-only queries.

mod event;
mod history;
mod key;
mod state;

pub use event::{Event, EventAction};
pub use history::{StateHistory, TransitionRecord};
pub use key::Key;
pub use state::{EntryAction, ExitAction, State};
