//! Filesystem adapter for the key-value persistence port.

mod store;

pub use store::FileKeyValueStore;
