//! Shared store read by the background reminder process.

use crate::reminder::domain::ReminderSnapshot;
use crate::task::ports::StorageError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for reminder sink operations.
pub type ReminderResult<T> = Result<T, ReminderError>;

/// Store shared with the background reminder process.
#[async_trait]
pub trait ReminderSink: Send + Sync {
    /// Replaces the snapshot stored under `key`.
    async fn publish(&self, key: &str, snapshot: &ReminderSnapshot) -> ReminderResult<()>;

    /// Reads the snapshot stored under `key`, if any.
    async fn snapshot(&self, key: &str) -> ReminderResult<Option<ReminderSnapshot>>;

    /// Asks the reminder process to re-check the snapshot now rather than
    /// at its next scheduled check.
    async fn request_check(&self) -> ReminderResult<()>;
}

/// Errors returned by reminder sink implementations.
#[derive(Debug, Clone, Error)]
pub enum ReminderError {
    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
