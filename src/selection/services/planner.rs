//! Planner session: the backlog, today's selection, and the rules tying
//! them together.

use super::{ChangeNotifier, PlannerConfig, PlannerEvent, SubscriptionId};
use crate::selection::domain::{DailySelection, GenerationMode, select};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId},
    ports::{KeyValueStore, StorageError, load_json, save_json},
    services::TaskStore,
};
use chrono::NaiveDate;
use mockable::Clock;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for planner operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Domain validation or scheduling failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Persistence failed. In-memory state already reflects the operation.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// One user's planning session.
///
/// The planner owns the backlog and today's selection and is the single
/// writer for both. Every mutating call updates in-memory state first, then
/// awaits the writes it needs, then notifies observers. A failed write
/// surfaces as [`PlannerError::Storage`] and leaves the in-memory state ahead
/// of storage; nothing is rolled back or retried.
pub struct DailyPlanner<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: TaskStore<S>,
    storage: Arc<S>,
    clock: Arc<C>,
    config: PlannerConfig,
    selection: Option<DailySelection>,
    observers: ChangeNotifier,
}

impl<S, C> DailyPlanner<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Loads a session from storage.
    ///
    /// Overdue recurring tasks are first rolled forward to their next
    /// occurrence on or after today; if any moved, the backlog is written
    /// once. A stored selection from another day, or one that cannot be
    /// decoded, is dropped and removed from storage. Missing or malformed
    /// backlog data loads as an empty backlog.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Storage`] when a read or the resulting writes
    /// fail.
    pub async fn load(
        storage: Arc<S>,
        clock: Arc<C>,
        config: PlannerConfig,
    ) -> PlannerResult<Self> {
        let mut store = TaskStore::load(Arc::clone(&storage), config.keys.tasks.clone()).await?;
        let today = clock.local().date_naive();

        let advanced = catch_up(&mut store, today);
        if advanced > 0 {
            tracing::info!(advanced, %today, "rolled overdue recurring tasks forward");
            store.persist().await?;
        }

        let selection =
            load_selection(&*storage, &config.keys.today_selection, today, store.tasks()).await?;

        Ok(Self {
            store,
            storage,
            clock,
            config,
            selection,
            observers: ChangeNotifier::new(),
        })
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns the clock's local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Returns the backlog in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Returns an owned copy of the backlog.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<Task> {
        self.store.snapshot()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.find(id)
    }

    /// Returns today's selection.
    ///
    /// Returns `None` when no selection exists or the one held was made on
    /// an earlier day.
    #[must_use]
    pub fn today_selection(&self) -> Option<&DailySelection> {
        let today = self.today();
        self.selection
            .as_ref()
            .filter(|selection| selection.is_valid_on(today))
    }

    /// Registers an observer for [`PlannerEvent`]s.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(PlannerEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Removes an observer. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Creates a task from `draft` and appends it to the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Domain`] when the draft is invalid, or
    /// [`PlannerError::Storage`] when the backlog write fails.
    pub async fn add_task(&mut self, draft: TaskDraft) -> PlannerResult<Task> {
        let task = Task::new(draft, &self.config.task_defaults, &*self.clock)?;
        self.store.push(task.clone());
        self.store.persist().await?;
        tracing::debug!(task_id = %task.id(), "task added");
        self.observers.emit(PlannerEvent::TasksChanged);
        Ok(task)
    }

    /// Replaces the stored task sharing `task`'s identifier.
    ///
    /// Completing a recurring task schedules its next occurrence one step
    /// after the previously stored deadline (edits to the incoming deadline
    /// are ignored for that calculation) and stores it open again; completing
    /// any other task stamps its completion time. The recurrence descriptor
    /// is normalised either way. When the task is part of today's selection
    /// the selected copy is refreshed and the selection is written as well.
    ///
    /// Returns the stored record, or `None` when the identifier is unknown,
    /// in which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Domain`] when the next occurrence cannot be
    /// represented, or [`PlannerError::Storage`] when a write fails.
    pub async fn update_task(&mut self, mut task: Task) -> PlannerResult<Option<Task>> {
        let Some(stored) = self.store.find(task.id()) else {
            tracing::debug!(task_id = %task.id(), "ignoring update for unknown task");
            return Ok(None);
        };
        task.settle_update(stored, self.clock.utc())?;

        self.store.replace(task.clone());
        let today = self.today();
        let selection_touched = self
            .selection
            .as_mut()
            .filter(|selection| selection.is_valid_on(today))
            .is_some_and(|selection| selection.refresh(&task));

        self.store.persist().await?;
        if selection_touched {
            self.persist_selection().await?;
        }

        self.observers.emit(PlannerEvent::TasksChanged);
        if selection_touched {
            self.observers.emit(PlannerEvent::TodaySelectionChanged);
        }
        Ok(Some(task))
    }

    /// Marks the task with `id` complete and applies the update rules.
    ///
    /// Returns `None` without writing when the task is unknown or already
    /// complete.
    ///
    /// # Errors
    ///
    /// See [`DailyPlanner::update_task`].
    pub async fn complete_task(&mut self, id: TaskId) -> PlannerResult<Option<Task>> {
        let Some(stored) = self.store.find(id) else {
            return Ok(None);
        };
        if stored.is_completed() {
            return Ok(None);
        }
        let mut completed = stored.clone();
        completed.mark_completed(self.clock.utc());
        self.update_task(completed).await
    }

    /// Removes the task with `id` from the backlog and from today's
    /// selection.
    ///
    /// Returns `false` without writing when the task is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Storage`] when a write fails.
    pub async fn delete_task(&mut self, id: TaskId) -> PlannerResult<bool> {
        if self.store.remove(id).is_none() {
            return Ok(false);
        }
        let today = self.today();
        let selection_touched = self
            .selection
            .as_mut()
            .filter(|selection| selection.is_valid_on(today))
            .is_some_and(|selection| selection.remove(id));

        self.store.persist().await?;
        if selection_touched {
            self.persist_selection().await?;
        }
        tracing::debug!(task_id = %id, selection_touched, "task deleted");

        self.observers.emit(PlannerEvent::TasksChanged);
        if selection_touched {
            self.observers.emit(PlannerEvent::TodaySelectionChanged);
        }
        Ok(true)
    }

    /// Picks today's tasks from the open backlog, replacing any existing
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Storage`] when the selection write fails.
    pub async fn generate_today(&mut self, mode: GenerationMode) -> PlannerResult<DailySelection> {
        let selection = self.build_selection(mode, &mut rand::thread_rng());
        self.install_selection(selection).await
    }

    /// Like [`DailyPlanner::generate_today`], drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Storage`] when the selection write fails.
    pub async fn generate_today_with<R>(
        &mut self,
        mode: GenerationMode,
        rng: &mut R,
    ) -> PlannerResult<DailySelection>
    where
        R: Rng + ?Sized,
    {
        let selection = self.build_selection(mode, rng);
        self.install_selection(selection).await
    }

    /// Drops today's selection and removes it from storage.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Storage`] when the removal fails.
    pub async fn clear_today_selection(&mut self) -> PlannerResult<()> {
        self.selection = None;
        self.storage
            .remove(&self.config.keys.today_selection)
            .await?;
        tracing::debug!("today's selection cleared");
        self.observers.emit(PlannerEvent::TodaySelectionChanged);
        Ok(())
    }

    fn build_selection<R>(&self, mode: GenerationMode, rng: &mut R) -> DailySelection
    where
        R: Rng + ?Sized,
    {
        let pool: Vec<Task> = self
            .store
            .tasks()
            .iter()
            .filter(|task| !task.is_completed())
            .cloned()
            .collect();
        DailySelection::new(select(mode, &pool, rng), self.today(), mode)
    }

    async fn install_selection(
        &mut self,
        selection: DailySelection,
    ) -> PlannerResult<DailySelection> {
        self.selection = Some(selection.clone());
        self.persist_selection().await?;
        tracing::info!(
            mode = selection.mode().as_str(),
            count = selection.len(),
            date = %selection.selection_date(),
            "generated today's selection"
        );
        self.observers.emit(PlannerEvent::TodaySelectionChanged);
        Ok(selection)
    }

    async fn persist_selection(&self) -> PlannerResult<()> {
        if let Some(selection) = &self.selection {
            save_json(
                &*self.storage,
                &self.config.keys.today_selection,
                selection,
            )
            .await?;
        }
        Ok(())
    }
}

/// Rolls every overdue recurring task forward and returns how many moved.
fn catch_up<S>(store: &mut TaskStore<S>, today: NaiveDate) -> usize
where
    S: KeyValueStore,
{
    let mut advanced = 0;
    for task in store.iter_mut() {
        match task.catch_up(today) {
            Ok(true) => advanced += 1,
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(task_id = %task.id(), error = %err, "skipping recurrence catch-up");
            }
        }
    }
    advanced
}

/// Loads the stored selection if it belongs to `today`; otherwise removes
/// whatever is stored.
async fn load_selection<S>(
    storage: &S,
    key: &str,
    today: NaiveDate,
    backlog: &[Task],
) -> PlannerResult<Option<DailySelection>>
where
    S: KeyValueStore + ?Sized,
{
    match load_json::<S, DailySelection>(storage, key).await {
        Ok(None) => return Ok(None),
        Ok(Some(mut selection)) if selection.is_valid_on(today) => {
            selection.refresh_from(backlog);
            return Ok(Some(selection));
        }
        Ok(Some(stale)) => {
            tracing::info!(
                selection_date = %stale.selection_date(),
                %today,
                "discarding selection from an earlier day"
            );
        }
        Err(err) if err.is_malformed() => {
            tracing::warn!(key, error = %err, "discarding malformed selection");
        }
        Err(err) => return Err(err.into()),
    }
    storage.remove(key).await?;
    Ok(None)
}
