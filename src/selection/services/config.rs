//! Planner configuration.

use crate::task::{domain::TaskDefaults, ports::StorageKeys};
use serde::{Deserialize, Serialize};

/// Configuration for a [`DailyPlanner`](super::DailyPlanner) session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Storage keys for the backlog and today's selection.
    pub keys: StorageKeys,
    /// Defaults applied to new tasks.
    pub task_defaults: TaskDefaults,
}

impl PlannerConfig {
    /// Overrides the storage keys.
    #[must_use]
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Overrides the new-task defaults.
    #[must_use]
    pub fn with_task_defaults(mut self, task_defaults: TaskDefaults) -> Self {
        self.task_defaults = task_defaults;
        self
    }
}
