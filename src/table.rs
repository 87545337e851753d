//! Diagnostic state table.
//!
//! Flattens a machine into one row per outgoing event (or a single
//! placeholder row for a terminal state). The table renders as fixed-width
//! text through `Display` and serializes to JSON through serde.

use crate::core::Key;
use crate::machine::Machine;
use serde::Serialize;
use std::fmt;

const COLUMN_WIDTH: usize = 16;
const RULE_WIDTH: usize = 80;
const PLACEHOLDER: &str = "---";
const HEADERS: [&str; 6] = ["STATE", "ACCEPTED", "TERMINAL", "EVENT", "ACTION", "NEXT_STATE"];

/// One row of the state table.
///
/// The event columns are `None` for the placeholder row of a state with no
/// outgoing events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub state: String,
    pub accepted: bool,
    pub terminal: bool,
    pub event: Option<String>,
    pub action: Option<bool>,
    pub next_state: Option<String>,
}

/// Tabular dump of a machine's states and events.
///
/// Rows follow registry order: ascending state id, then ascending event id.
///
/// # Example
///
/// ```rust
/// use turnstile::Machine;
///
/// let mut machine: Machine<&str, &str> = Machine::new();
/// machine.add_state("radio").add_event_to("switch_cd", "cdplayer")?;
///
/// let table = machine.state_table();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[0].state, "cdplayer");
/// assert_eq!(table.rows()[0].event, None);
/// assert_eq!(table.rows()[1].next_state.as_deref(), Some("cdplayer"));
///
/// let text = table.to_string();
/// assert!(text.starts_with("STATE"));
/// # Ok::<(), turnstile::BuildError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateTable {
    rows: Vec<TableRow>,
}

impl StateTable {
    /// Build the table from a machine whose ids render through `Display`.
    pub fn from_machine<S, E>(machine: &Machine<S, E>) -> Self
    where
        S: Key + fmt::Display,
        E: Key + fmt::Display,
    {
        let mut rows = Vec::new();
        for state in machine.states() {
            let base = TableRow {
                state: state.id().to_string(),
                accepted: state.is_accepted(),
                terminal: state.is_terminal(),
                event: None,
                action: None,
                next_state: None,
            };
            if state.is_terminal() {
                rows.push(base);
                continue;
            }
            for event in state.events() {
                rows.push(TableRow {
                    event: Some(event.id().to_string()),
                    action: Some(event.has_action()),
                    next_state: Some(event.target().to_string()),
                    ..base.clone()
                });
            }
        }
        Self { rows }
    }

    /// Rows in registry order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for a machine with no states.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the rows as a compact JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize the rows as an indented JSON array.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[&dyn fmt::Display]) -> fmt::Result {
    for cell in cells {
        write!(f, "{:<width$}", cell.to_string(), width = COLUMN_WIDTH)?;
    }
    writeln!(f)
}

impl fmt::Display for StateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&dyn fmt::Display> =
            HEADERS.iter().map(|h| h as &dyn fmt::Display).collect();
        write_cells(f, &headers)?;

        for row in &self.rows {
            let event = row.event.as_deref().unwrap_or(PLACEHOLDER);
            let action = row
                .action
                .map_or_else(|| PLACEHOLDER.to_string(), |bound| bound.to_string());
            let next_state = row.next_state.as_deref().unwrap_or(PLACEHOLDER);
            write_cells(
                f,
                &[&row.state, &row.accepted, &row.terminal, &event, &action, &next_state],
            )?;
        }

        writeln!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}
