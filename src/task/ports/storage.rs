//! Key-value persistence port shared by the backlog and the daily planner.

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence contract: a flat map from string keys to JSON documents.
///
/// Each call resolves once the backend has acknowledged the operation.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the document stored under `key`.
    ///
    /// Returns `None` when nothing is stored.
    async fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous document.
    async fn set(&self, key: &str, value: Value) -> StorageResult<()>;

    /// Removes the document stored under `key`. Removing an absent key
    /// succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The stored document could not be decoded.
    #[error("malformed document under '{key}': {message}")]
    Malformed {
        /// Key of the offending document.
        key: String,
        /// Decoder diagnostic.
        message: String,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode value: {0}")]
    Encode(String),

    /// Backend failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Returns whether the error describes unreadable stored content rather
    /// than a failing backend.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Keys under which the planner persists its collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Key of the full backlog.
    pub tasks: String,
    /// Key of today's selection.
    pub today_selection: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "tasks".to_owned(),
            today_selection: "todaySelection".to_owned(),
        }
    }
}

/// Reads and decodes the document stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] when the document does not decode as
/// `T`, or the backend's error when the read fails.
pub async fn load_json<S, T>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(value) = store.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_value(value)
        .map(Some)
        .map_err(|err| StorageError::Malformed {
            key: key.to_owned(),
            message: err.to_string(),
        })
}

/// Encodes `value` and stores it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] when serialisation fails, or the
/// backend's error when the write fails.
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let document =
        serde_json::to_value(value).map_err(|err| StorageError::Encode(err.to_string()))?;
    store.set(key, document).await
}
