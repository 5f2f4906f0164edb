//! Daily selection engine.
//!
//! Picks the (at most) three tasks that make up "today", keeps that pick in
//! step with edits to the backlog, and reschedules recurring tasks when they
//! are completed or overdue.
//!
//! - Domain types and selection strategies in [`domain`]
//! - The planner session and observer registry in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
