//! Domain model for the task backlog.
//!
//! The task domain models backlog items, their priority tiers, and the
//! recurrence schedule that moves a repeating task to its next occurrence,
//! while keeping all persistence concerns outside of the domain boundary.

mod defaults;
mod error;
mod ids;
mod priority;
mod recurrence;
mod task;

pub use defaults::TaskDefaults;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::Priority;
pub use recurrence::{Recurrence, RecurrenceUnit, advance};
pub use task::{Task, TaskDraft};
