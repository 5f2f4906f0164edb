//! Key-value store persisting one JSON document per key.
//!
//! Documents live in a single directory opened through `cap-std`, so the
//! store can never touch paths outside it. Writes go to a temporary file
//! that is renamed over the target, leaving either the old or the new
//! document on disk. Blocking filesystem calls run on
//! [`tokio::task::spawn_blocking`].

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde_json::Value;
use std::io;
use std::sync::Arc;

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

const DOCUMENT_EXTENSION: &str = "json";

/// File-backed key-value store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: Arc<Dir>,
    path: Utf8PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store at `path`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StorageError::backend)?;
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self {
            root: Arc::new(root),
            path: path.to_owned(),
        })
    }

    /// Returns the directory holding the documents.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Maps a key to its document file name, rejecting keys that could escape
/// the flat layout.
fn document_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{DOCUMENT_EXTENSION}"))
}

async fn run_blocking<F, T>(f: F) -> StorageResult<T>
where
    F: FnOnce() -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| StorageError::backend(io::Error::other(format!("task join error: {err}"))))?
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let name = document_name(key)?;
        let root = Arc::clone(&self.root);
        let owned_key = key.to_owned();
        run_blocking(move || {
            let contents = match root.read_to_string(&name) {
                Ok(contents) => contents,
                Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(StorageError::backend(err)),
            };
            serde_json::from_str(&contents)
                .map(Some)
                .map_err(|err| StorageError::Malformed {
                    key: owned_key,
                    message: err.to_string(),
                })
        })
        .await
    }

    async fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let name = document_name(key)?;
        let contents =
            serde_json::to_vec_pretty(&value).map_err(|err| StorageError::Encode(err.to_string()))?;
        let root = Arc::clone(&self.root);
        run_blocking(move || {
            let staging = format!("{name}.tmp");
            root.write(&staging, &contents)
                .map_err(StorageError::backend)?;
            root.rename(&staging, &root, &name)
                .map_err(StorageError::backend)
        })
        .await?;
        tracing::debug!(key, "document written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let name = document_name(key)?;
        let root = Arc::clone(&self.root);
        run_blocking(move || match root.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::backend(err)),
        })
        .await
    }
}
