//! Adapter implementations of the task persistence port.
//!
//! - [`memory`]: Thread-safe in-memory store with an operation journal
//! - [`file`]: JSON documents in a capability-scoped directory

pub mod file;
pub mod memory;
