//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Runtime options for a [`Machine`](crate::Machine).
///
/// Every field has a default, so a partial document deserializes cleanly.
///
/// # Example
///
/// ```rust
/// use turnstile::MachineConfig;
///
/// let config = MachineConfig::from_json_str(r#"{ "record_history": true }"#)?;
/// assert!(config.record_history);
/// assert_eq!(config.history_capacity, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Record one history entry per successful dispatch
    pub record_history: bool,

    /// Maximum number of retained history entries; `None` is unbounded
    pub history_capacity: Option<usize>,
}

impl MachineConfig {
    /// Configuration with history recording enabled.
    pub fn with_history(capacity: Option<usize>) -> Self {
        Self {
            record_history: true,
            history_capacity: capacity,
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
