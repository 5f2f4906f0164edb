//! Error types for task domain validation and scheduling.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or rescheduling domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Advancing a deadline would leave the representable calendar range.
    #[error("cannot advance deadline {0} beyond the supported calendar range")]
    DeadlineOutOfRange(NaiveDate),
}
