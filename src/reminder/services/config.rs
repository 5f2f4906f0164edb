//! Reminder configuration.

use std::time::Duration;

/// Settings shared by the reminder mirror and checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderConfig {
    /// Key the snapshot is published under.
    pub store_key: String,
    /// Period between scheduled checks by the background process.
    pub check_interval: Duration,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            store_key: "todayPowerOfThreeTasks".to_owned(),
            check_interval: Duration::from_secs(60 * 60),
        }
    }
}

impl ReminderConfig {
    /// Overrides the check interval.
    #[must_use]
    pub const fn with_check_interval(mut self, check_interval: Duration) -> Self {
        self.check_interval = check_interval;
        self
    }
}
