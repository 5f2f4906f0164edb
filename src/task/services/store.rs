//! Backlog store owning the canonical task records.

use crate::task::{
    domain::{Task, TaskId},
    ports::{KeyValueStore, StorageResult, load_json, save_json},
};
use std::sync::Arc;

/// Authoritative, ordered list of backlog tasks.
///
/// In-memory mutators are synchronous and never touch storage.
/// [`TaskStore::add`], [`TaskStore::update`] and [`TaskStore::delete`] apply
/// a mutation and then await a single write of the whole backlog. Callers
/// coordinating several collections use the synchronous mutators followed by
/// [`TaskStore::persist`].
pub struct TaskStore<S>
where
    S: KeyValueStore,
{
    storage: Arc<S>,
    key: String,
    tasks: Vec<Task>,
}

impl<S> TaskStore<S>
where
    S: KeyValueStore,
{
    /// Creates an empty store persisting under `key`.
    #[must_use]
    pub fn empty(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            tasks: Vec::new(),
        }
    }

    /// Loads the backlog stored under `key`.
    ///
    /// A missing or undecodable document yields an empty backlog.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the read itself fails.
    pub async fn load(storage: Arc<S>, key: impl Into<String>) -> StorageResult<Self> {
        let key = key.into();
        let tasks = match load_json::<S, Vec<Task>>(&*storage, &key).await {
            Ok(tasks) => tasks.unwrap_or_default(),
            Err(err) if err.is_malformed() => {
                tracing::warn!(key = %key, error = %err, "discarding malformed backlog");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(key = %key, count = tasks.len(), "backlog loaded");
        Ok(Self {
            storage,
            key,
            tasks,
        })
    }

    /// Returns the key the backlog is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the backlog in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns an owned copy of the backlog; changes to it do not affect
    /// the store.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the backlog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task without persisting.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replaces the task with the same identifier without persisting.
    ///
    /// Returns `false` and leaves the backlog unchanged when no task has
    /// that identifier.
    pub fn replace(&mut self, task: Task) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|stored| stored.id() == task.id()) else {
            return false;
        };
        *slot = task;
        true
    }

    /// Removes the task with `id` without persisting.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(index))
    }

    /// Mutable access to every task, for bulk maintenance such as
    /// recurrence catch-up.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }

    /// Writes the whole backlog.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the write fails. The in-memory
    /// backlog is not rolled back.
    pub async fn persist(&self) -> StorageResult<()> {
        save_json(&*self.storage, &self.key, &self.tasks).await?;
        tracing::debug!(key = %self.key, count = self.tasks.len(), "backlog persisted");
        Ok(())
    }

    /// Appends `task` and persists the backlog.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the write fails.
    pub async fn add(&mut self, task: Task) -> StorageResult<()> {
        self.push(task);
        self.persist().await
    }

    /// Replaces the stored record matching `task` and persists.
    ///
    /// Returns `Ok(false)` without writing when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the write fails.
    pub async fn update(&mut self, task: Task) -> StorageResult<bool> {
        if !self.replace(task) {
            return Ok(false);
        }
        self.persist().await?;
        Ok(true)
    }

    /// Removes the task with `id` and persists.
    ///
    /// Returns `Ok(None)` without writing when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the write fails.
    pub async fn delete(&mut self, id: TaskId) -> StorageResult<Option<Task>> {
        let Some(removed) = self.remove(id) else {
            return Ok(None);
        };
        self.persist().await?;
        Ok(Some(removed))
    }
}
