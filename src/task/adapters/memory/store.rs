//! In-memory key-value store.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

/// A mutating call recorded by [`InMemoryKeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOperation {
    /// A `set` call for the given key.
    Set(String),
    /// A `remove` call for the given key.
    Remove(String),
}

/// Thread-safe in-memory key-value store.
///
/// This is primarily a test double. A store built with [`Self::new`] appends
/// every `set` and `remove` to an unbounded journal so tests can assert how
/// many writes an operation issued. Long-lived ephemeral sessions should use
/// [`Self::untracked`], which keeps no journal.
#[derive(Debug, Clone)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug)]
struct InMemoryStoreState {
    documents: HashMap<String, Value>,
    journal: Vec<StorageOperation>,
    journaling: bool,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store that journals every mutating call.
    #[must_use]
    pub fn new() -> Self {
        Self::with_journaling(true)
    }

    /// Creates an empty store that records no journal.
    #[must_use]
    pub fn untracked() -> Self {
        Self::with_journaling(false)
    }

    fn with_journaling(journaling: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryStoreState {
                documents: HashMap::new(),
                journal: Vec::new(),
                journaling,
            })),
        }
    }

    /// Places a document without recording it in the journal.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the lock is poisoned.
    pub fn seed(&self, key: impl Into<String>, value: Value) -> StorageResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.documents.insert(key.into(), value);
        Ok(())
    }

    /// Returns the document currently stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the lock is poisoned.
    pub fn peek(&self, key: &str) -> StorageResult<Option<Value>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.documents.get(key).cloned())
    }

    /// Returns the recorded mutating calls in issue order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the lock is poisoned.
    pub fn operations(&self) -> StorageResult<Vec<StorageOperation>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.journal.clone())
    }

    /// Counts recorded `set` calls for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the lock is poisoned.
    pub fn write_count(&self, key: &str) -> StorageResult<usize> {
        self.count(|op| matches!(op, StorageOperation::Set(k) if k == key))
    }

    /// Counts recorded `remove` calls for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the lock is poisoned.
    pub fn removal_count(&self, key: &str) -> StorageResult<usize> {
        self.count(|op| matches!(op, StorageOperation::Remove(k) if k == key))
    }

    /// Forgets all recorded operations, keeping the documents.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the lock is poisoned.
    pub fn clear_journal(&self) -> StorageResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.journal.clear();
        Ok(())
    }

    fn count(&self, predicate: impl Fn(&StorageOperation) -> bool) -> StorageResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.journal.iter().filter(|op| predicate(op)).count())
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStoreState {
    fn record(&mut self, operation: StorageOperation) {
        if self.journaling {
            self.journal.push(operation);
        }
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> StorageError {
    StorageError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        self.peek(key)
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.documents.insert(key.to_owned(), value);
        state.record(StorageOperation::Set(key.to_owned()));
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.documents.remove(key);
        state.record(StorageOperation::Remove(key.to_owned()));
        Ok(())
    }
}
