//! Decides whether the reminder process should raise a reminder.

use crate::reminder::{
    domain::Reminder,
    ports::{ReminderResult, ReminderSink},
    services::ReminderConfig,
};
use std::sync::Arc;
use std::time::Duration;

/// Reads the published snapshot and yields a reminder for the first open
/// task.
#[derive(Clone)]
pub struct ReminderChecker<K>
where
    K: ReminderSink,
{
    sink: Arc<K>,
    config: ReminderConfig,
}

impl<K> ReminderChecker<K>
where
    K: ReminderSink,
{
    /// Creates a checker reading from `sink`.
    #[must_use]
    pub const fn new(sink: Arc<K>, config: ReminderConfig) -> Self {
        Self { sink, config }
    }

    /// Returns the period between scheduled checks.
    #[must_use]
    pub const fn check_interval(&self) -> Duration {
        self.config.check_interval
    }

    /// Returns a reminder when the published snapshot has an open task.
    ///
    /// A missing or empty snapshot, or one where every task is complete,
    /// yields `None`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when the snapshot cannot be read.
    pub async fn check(&self) -> ReminderResult<Option<Reminder>> {
        let Some(snapshot) = self.sink.snapshot(&self.config.store_key).await? else {
            tracing::debug!("no reminder snapshot published");
            return Ok(None);
        };
        let reminder = snapshot.first_incomplete().map(Reminder::for_entry);
        if reminder.is_none() {
            tracing::debug!("every selected task is complete");
        }
        Ok(reminder)
    }
}
