//! Builder API for declaring states and events.
//!
//! [`Machine::add_state`](crate::Machine::add_state) returns a
//! [`StateBuilder`] that borrows the machine. Hooks can be bound and events
//! declared through it, and each event yields an [`EventBuilder`] for binding
//! the event's action. States named as event targets are created on demand,
//! so a graph can be declared in any order.

pub mod error;
pub mod event;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use event::EventBuilder;
pub use state::StateBuilder;
