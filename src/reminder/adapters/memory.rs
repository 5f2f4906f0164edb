//! In-memory reminder sink.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::reminder::{
    domain::ReminderSnapshot,
    ports::{ReminderResult, ReminderSink},
};
use crate::task::ports::StorageError;

/// Thread-safe in-memory reminder sink that counts re-check requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderSink {
    snapshots: Arc<RwLock<HashMap<String, ReminderSnapshot>>>,
    check_requests: Arc<AtomicUsize>,
}

impl InMemoryReminderSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many re-checks have been requested.
    #[must_use]
    pub fn check_requests(&self) -> usize {
        self.check_requests.load(Ordering::SeqCst)
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> StorageError {
    StorageError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ReminderSink for InMemoryReminderSink {
    async fn publish(&self, key: &str, snapshot: &ReminderSnapshot) -> ReminderResult<()> {
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        snapshots.insert(key.to_owned(), snapshot.clone());
        Ok(())
    }

    async fn snapshot(&self, key: &str) -> ReminderResult<Option<ReminderSnapshot>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots.get(key).cloned())
    }

    async fn request_check(&self) -> ReminderResult<()> {
        self.check_requests.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
