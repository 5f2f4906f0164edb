//! Publishes today's selection for the reminder process.

use crate::reminder::{
    domain::ReminderSnapshot,
    ports::{ReminderResult, ReminderSink},
    services::ReminderConfig,
};
use crate::selection::domain::DailySelection;
use std::sync::Arc;

/// Mirrors today's selection into a [`ReminderSink`].
#[derive(Clone)]
pub struct ReminderMirror<K>
where
    K: ReminderSink,
{
    sink: Arc<K>,
    config: ReminderConfig,
}

impl<K> ReminderMirror<K>
where
    K: ReminderSink,
{
    /// Creates a mirror publishing through `sink`.
    #[must_use]
    pub const fn new(sink: Arc<K>, config: ReminderConfig) -> Self {
        Self { sink, config }
    }

    /// Publishes the projection of `selection` and asks the reminder
    /// process to re-check it. Passing `None` publishes an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when publishing or signalling fails.
    pub async fn mirror(&self, selection: Option<&DailySelection>) -> ReminderResult<()> {
        let snapshot = ReminderSnapshot::from_selection(selection);
        self.sink.publish(&self.config.store_key, &snapshot).await?;
        tracing::debug!(
            key = %self.config.store_key,
            entries = snapshot.entries().len(),
            "reminder snapshot published"
        );
        self.sink.request_check().await
    }
}
