//! Adapter implementations of the reminder sink.

pub mod memory;
