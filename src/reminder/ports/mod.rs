//! Port contracts for the reminder collaborator.

pub mod sink;

pub use sink::{ReminderError, ReminderResult, ReminderSink};
