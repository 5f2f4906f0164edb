//! Simplified view of today's selection for background reminders.

use crate::selection::domain::DailySelection;
use serde::{Deserialize, Serialize};

/// One selected task as seen by the reminder process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEntry {
    /// Task title.
    pub title: String,
    /// Whether the task is complete.
    pub is_completed: bool,
}

/// Projection of today's selection published for the reminder process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSnapshot {
    entries: Vec<ReminderEntry>,
}

impl ReminderSnapshot {
    /// Creates a snapshot from explicit entries.
    #[must_use]
    pub const fn new(entries: Vec<ReminderEntry>) -> Self {
        Self { entries }
    }

    /// Projects `selection`; no selection projects to an empty snapshot.
    #[must_use]
    pub fn from_selection(selection: Option<&DailySelection>) -> Self {
        let entries = selection
            .map(|selection| {
                selection
                    .tasks()
                    .iter()
                    .map(|task| ReminderEntry {
                        title: task.title().to_owned(),
                        is_completed: task.is_completed(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { entries }
    }

    /// Returns the entries in selection order.
    #[must_use]
    pub fn entries(&self) -> &[ReminderEntry] {
        &self.entries
    }

    /// Returns the first entry that is still open.
    #[must_use]
    pub fn first_incomplete(&self) -> Option<&ReminderEntry> {
        self.entries.iter().find(|entry| !entry.is_completed)
    }
}
