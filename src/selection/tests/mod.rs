//! Unit tests for the daily selection engine.


use crate::task::domain::{Priority, Task, TaskDefaults, TaskDraft};
use crate::test_support::{FixedClock, date};
use chrono::NaiveDate;

/// Builds an open task with the given priority and deadline.
fn task(title: &str, priority: Priority, deadline: NaiveDate) -> Task {
    let clock = FixedClock::on(date(2026, 6, 1));
    Task::new(
        TaskDraft::new(title)
            .with_priority(priority)
            .with_deadline(deadline),
        &TaskDefaults::default(),
        &clock,
    )
    .expect("valid task")
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}
