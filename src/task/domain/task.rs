//! Task record and creation payload.

use super::{Priority, Recurrence, TaskDefaults, TaskDomainError, TaskId};
use chrono::{DateTime, Days, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Creation payload for a new backlog task.
///
/// Only the title is required; everything else falls back to
/// [`TaskDefaults`] when the task is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    subtasks: Vec<String>,
    deadline: Option<NaiveDate>,
    priority: Option<Priority>,
    category: Option<String>,
    estimated_minutes: Option<u32>,
    recurrence: Recurrence,
}

impl TaskDraft {
    /// Creates a draft with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            subtasks: Vec::new(),
            deadline: None,
            priority: None,
            category: None,
            estimated_minutes: None,
            recurrence: Recurrence::none(),
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the ordered subtask labels.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = String>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the priority tier.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the effort estimate in minutes.
    #[must_use]
    pub const fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Sets the recurrence schedule.
    #[must_use]
    pub const fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }
}

/// A backlog task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    subtasks: Vec<String>,
    deadline: NaiveDate,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    is_completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    estimated_minutes: u32,
    #[serde(default)]
    recurrence: Recurrence,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    ///
    /// Missing draft fields take their value from `defaults`; the default
    /// deadline is counted from the clock's local calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank and
    /// [`TaskDomainError::DeadlineOutOfRange`] when the default deadline
    /// cannot be represented.
    pub fn new(
        draft: TaskDraft,
        defaults: &TaskDefaults,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let deadline = match draft.deadline {
            Some(deadline) => deadline,
            None => {
                let today = clock.local().date_naive();
                today
                    .checked_add_days(Days::new(u64::from(defaults.deadline_offset_days)))
                    .ok_or(TaskDomainError::DeadlineOutOfRange(today))?
            }
        };

        Ok(Self {
            id: TaskId::new(),
            title: title.to_owned(),
            description: draft.description,
            subtasks: draft.subtasks,
            deadline,
            priority: draft.priority.unwrap_or_else(|| defaults.priority.clone()),
            is_completed: false,
            created_at: clock.utc(),
            completed_at: None,
            category: draft
                .category
                .unwrap_or_else(|| defaults.category.clone()),
            estimated_minutes: draft
                .estimated_minutes
                .unwrap_or(defaults.estimated_minutes),
            recurrence: draft.recurrence.normalised(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ordered subtask labels.
    #[must_use]
    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the priority tier.
    #[must_use]
    pub const fn priority(&self) -> &Priority {
        &self.priority
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the task, or its latest occurrence, was completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the effort estimate in minutes.
    #[must_use]
    pub const fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Returns the recurrence schedule.
    #[must_use]
    pub const fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        self.title = trimmed.to_owned();
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the subtask labels.
    pub fn set_subtasks(&mut self, subtasks: impl IntoIterator<Item = String>) {
        self.subtasks = subtasks.into_iter().collect();
    }

    /// Moves the deadline.
    pub const fn set_deadline(&mut self, deadline: NaiveDate) {
        self.deadline = deadline;
    }

    /// Changes the priority tier.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Changes the category label.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Changes the effort estimate.
    pub const fn set_estimated_minutes(&mut self, minutes: u32) {
        self.estimated_minutes = minutes;
    }

    /// Replaces the recurrence schedule.
    pub fn set_recurrence(&mut self, recurrence: Recurrence) {
        self.recurrence = recurrence.normalised();
    }

    /// Marks the task complete at `at`.
    pub const fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.is_completed = true;
        self.completed_at = Some(at);
    }

    /// Marks the task open again and forgets its completion time.
    pub const fn reopen(&mut self) {
        self.is_completed = false;
        self.completed_at = None;
    }

    /// Applies the completion and recurrence rules to an edited record
    /// before it replaces the stored one.
    ///
    /// A completed recurring task is rescheduled one step past
    /// `stored_deadline` and reopened, keeping `completed_at` as history. A
    /// completed one-off task keeps its flag and is stamped with `now`. The
    /// recurrence descriptor is normalised in all cases.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineOutOfRange`] when the next
    /// occurrence cannot be represented.
    pub fn settle_update(
        &mut self,
        stored: &Self,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        if self.is_completed && self.recurrence.is_active() {
            self.deadline = self.recurrence.next_after(stored.deadline)?;
            self.completed_at = Some(now);
            self.is_completed = false;
        } else if self.is_completed {
            self.completed_at = Some(now);
        }
        self.recurrence = self.recurrence.normalised();
        Ok(())
    }

    /// Rolls an overdue recurring task forward to its first occurrence on or
    /// after `today`, reopening it.
    ///
    /// Returns `Ok(true)` when the deadline moved. The task is left untouched
    /// when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineOutOfRange`] when an occurrence
    /// cannot be represented.
    pub fn catch_up(&mut self, today: NaiveDate) -> Result<bool, TaskDomainError> {
        if !self.recurrence.is_active() || self.deadline >= today {
            return Ok(false);
        }
        let mut deadline = self.deadline;
        while deadline < today {
            deadline = self.recurrence.next_after(deadline)?;
        }
        self.deadline = deadline;
        self.is_completed = false;
        Ok(true)
    }
}
