//! Task backlog management.
//!
//! This module owns the canonical task records: their domain model, the
//! recurrence arithmetic that reschedules repeating tasks, and the backlog
//! store that persists them through a key-value port. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Backlog services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
