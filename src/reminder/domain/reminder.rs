//! Reminder raised for an unfinished task.

use super::ReminderEntry;

/// A user-facing reminder about an open task from today's selection.
///
/// Reminders share a fixed tag so a newer one replaces an older one on
/// platforms that group notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Notification headline.
    pub title: String,
    /// Notification body naming the open task.
    pub body: String,
    /// Grouping tag.
    pub tag: String,
}

impl Reminder {
    /// Headline used for every reminder.
    pub const TITLE: &'static str = "PowerOfThree Reminder";
    /// Grouping tag used for every reminder.
    pub const TAG: &'static str = "powerofthree-task-reminder";

    /// Builds the reminder for `entry`.
    #[must_use]
    pub fn for_entry(entry: &ReminderEntry) -> Self {
        Self {
            title: Self::TITLE.to_owned(),
            body: format!("Don't forget: {}", entry.title),
            tag: Self::TAG.to_owned(),
        }
    }
}
