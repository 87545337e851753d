//! Dispatch errors.

use thiserror::Error;

/// Errors that can occur when dispatching an event.
///
/// A failed dispatch never moves the cursor and never invokes a callback.
/// Ids are rendered with their `Debug` form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No event {event} for state {state}")]
    NoSuchEvent { state: String, event: String },

    #[error("Machine has no states. Call .add_state(id) before dispatching")]
    EmptyMachine,
}
