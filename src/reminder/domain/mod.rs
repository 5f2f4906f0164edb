//! Domain model for reminders.

mod reminder;
mod snapshot;

pub use reminder::Reminder;
pub use snapshot::{ReminderEntry, ReminderSnapshot};
