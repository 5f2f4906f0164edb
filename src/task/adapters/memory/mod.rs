//! In-memory adapter implementations for testing and ephemeral sessions.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without touching the filesystem.

mod store;

pub use store::{InMemoryKeyValueStore, StorageOperation};
