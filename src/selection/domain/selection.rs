//! Snapshot of the tasks chosen for a given day.

use super::{DAILY_LIMIT, GenerationMode};
use crate::task::domain::{Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The tasks picked for one calendar day.
///
/// Entries are copies of backlog records; the planner refreshes them whenever
/// the canonical record changes. A selection only counts for the day it was
/// made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySelection {
    tasks: Vec<Task>,
    selection_date: NaiveDate,
    mode: GenerationMode,
}

impl DailySelection {
    /// Creates a selection for `selection_date`.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, selection_date: NaiveDate, mode: GenerationMode) -> Self {
        Self {
            tasks,
            selection_date,
            mode,
        }
    }

    /// Returns the selected tasks in pick order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the day the selection was made for.
    #[must_use]
    pub const fn selection_date(&self) -> NaiveDate {
        self.selection_date
    }

    /// Returns the strategy that produced the selection.
    #[must_use]
    pub const fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Returns the number of selected tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counts selected tasks currently marked complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Returns whether a full selection of three has been completed.
    ///
    /// A selection with fewer than three tasks never counts as all done.
    #[must_use]
    pub fn is_all_completed(&self) -> bool {
        self.tasks.len() == DAILY_LIMIT && self.completed_count() == DAILY_LIMIT
    }

    /// Returns whether the selection belongs to `today`.
    #[must_use]
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        self.selection_date == today
    }

    /// Returns whether the task with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    /// Replaces the entry sharing `task`'s identifier with a copy of `task`.
    ///
    /// Returns `false` when the task is not selected.
    pub fn refresh(&mut self, task: &Task) -> bool {
        let Some(entry) = self.tasks.iter_mut().find(|entry| entry.id() == task.id()) else {
            return false;
        };
        entry.clone_from(task);
        true
    }

    /// Refreshes every entry from the matching backlog record. Entries with
    /// no backlog counterpart are left as they are.
    pub fn refresh_from(&mut self, backlog: &[Task]) {
        for entry in &mut self.tasks {
            if let Some(canonical) = backlog.iter().find(|task| task.id() == entry.id()) {
                entry.clone_from(canonical);
            }
        }
    }

    /// Removes the entry with `id`.
    ///
    /// Returns `false` when the task is not selected.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }
}
