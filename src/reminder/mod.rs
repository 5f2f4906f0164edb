//! Reminder projection of today's selection.
//!
//! A background notifier does not need full task records; it only needs to
//! know which of today's tasks are still open. This module reduces the
//! selection to that projection, publishes it to a shared sink, and decides
//! whether a reminder is due. Delivering the reminder is left to the caller.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
