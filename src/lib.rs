//! Power of Three: a daily focus planner.
//!
//! Users keep a backlog of tasks and, each day, pick three of them to focus
//! on. This crate provides the engine behind that workflow: the task backlog,
//! the daily selection strategies, recurrence scheduling, and the reminder
//! projection consumed by background notifiers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure planning logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and reminders
//! - **Adapters**: Concrete implementations of ports (in-memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task records, recurrence arithmetic, and the backlog store
//! - [`selection`]: Daily selection strategies and the planner session
//! - [`reminder`]: Reminder projection of today's selection

pub mod reminder;
pub mod selection;
pub mod task;
