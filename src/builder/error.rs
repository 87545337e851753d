//! Build errors for state and event builders.

use thiserror::Error;

/// Errors that can occur when declaring states and events.
///
/// Ids are rendered with their `Debug` form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Event {event} already declared on state {state}")]
    DuplicateEvent { state: String, event: String },
}
