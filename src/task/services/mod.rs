//! Application services for the task backlog.

mod store;

pub use store::TaskStore;
