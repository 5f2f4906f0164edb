//! Services publishing and evaluating reminder snapshots.

mod checker;
mod config;
mod mirror;

pub use checker::ReminderChecker;
pub use config::ReminderConfig;
pub use mirror::ReminderMirror;
