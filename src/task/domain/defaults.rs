//! Default values applied to newly created tasks.

use super::Priority;
use serde::{Deserialize, Serialize};

/// Field defaults for tasks created without explicit values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDefaults {
    /// Days between creation and the default deadline.
    pub deadline_offset_days: u32,
    /// Priority assigned when none is given.
    pub priority: Priority,
    /// Estimated effort in minutes.
    pub estimated_minutes: u32,
    /// Category label.
    pub category: String,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            deadline_offset_days: 1,
            priority: Priority::Medium,
            estimated_minutes: 30,
            category: "General".to_owned(),
        }
    }
}
