//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the backlog and
//! planner services.

pub mod storage;

pub use storage::{KeyValueStore, StorageError, StorageKeys, StorageResult, load_json, save_json};
