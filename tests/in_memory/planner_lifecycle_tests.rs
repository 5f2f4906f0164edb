//! In-memory integration tests for multi-day planner sessions.

use std::sync::Arc;

use super::helpers::{clock, open_planner, storage};
use crate::test_helpers::{FixedClock, date};
use eyre::{WrapErr, ensure, eyre};
use power_of_three::selection::domain::GenerationMode;
use power_of_three::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Priority, Recurrence, RecurrenceUnit, Task, TaskDraft},
};
use rstest::rstest;
use serde_json::{Value, json};

const TASKS: &str = "tasks";
const SELECTION: &str = "todaySelection";

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_full_day_survives_a_reload(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    for (title, priority) in [
        ("Finish slides", Priority::High),
        ("Call plumber", Priority::Medium),
        ("Sort receipts", Priority::Low),
        ("Read article", Priority::Low),
    ] {
        planner
            .add_task(TaskDraft::new(title).with_priority(priority))
            .await
            .wrap_err("add backlog task")?;
    }

    let selection = planner.generate_today(GenerationMode::Balanced).await?;
    ensure!(selection.len() == 3, "expected a full selection");
    for task in selection.tasks() {
        planner.complete_task(task.id()).await?;
    }

    let reloaded = open_planner(&storage, &clock).await?;
    let today = reloaded
        .today_selection()
        .ok_or_else(|| eyre!("selection should survive a same-day reload"))?;
    ensure!(today.is_all_completed(), "progress should be restored");
    ensure!(
        titles(today.tasks()) == ["Finish slides", "Call plumber", "Sort receipts"],
        "unexpected picks: {:?}",
        titles(today.tasks())
    );
    ensure!(
        reloaded.tasks().iter().filter(|task| task.is_completed()).count() == 3,
        "backlog should carry the completions"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_next_morning_starts_without_a_selection(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    planner.add_task(TaskDraft::new("Reply to Sam")).await?;
    planner.generate_today(GenerationMode::ByDeadline).await?;

    clock.set_date(date(2026, 10, 6));
    storage.clear_journal()?;
    let next_day = open_planner(&storage, &clock).await?;

    ensure!(next_day.today_selection().is_none());
    ensure!(storage.peek(SELECTION)?.is_none(), "stale selection removed");
    ensure!(storage.removal_count(SELECTION)? == 1);
    ensure!(next_day.tasks().len() == 1, "backlog is untouched");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_daily_task_moves_it_to_tomorrow(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    let habit = planner
        .add_task(
            TaskDraft::new("Practise piano")
                .with_deadline(date(2026, 10, 5))
                .with_recurrence(Recurrence::every(1, RecurrenceUnit::Day)),
        )
        .await?;

    let stored = planner
        .complete_task(habit.id())
        .await?
        .ok_or_else(|| eyre!("task should be known"))?;
    ensure!(stored.deadline() == date(2026, 10, 6));
    ensure!(!stored.is_completed(), "next occurrence is open");

    clock.set_date(date(2026, 10, 6));
    storage.clear_journal()?;
    let next_day = open_planner(&storage, &clock).await?;

    ensure!(
        storage.write_count(TASKS)? == 0,
        "nothing was overdue on reload"
    );
    let reloaded = next_day
        .task(habit.id())
        .ok_or_else(|| eyre!("habit should persist"))?;
    ensure!(reloaded.deadline() == date(2026, 10, 6));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_long_absence_rolls_every_recurrence_forward(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    let weekly = planner
        .add_task(
            TaskDraft::new("Team retro")
                .with_deadline(date(2026, 10, 5))
                .with_recurrence(Recurrence::every(1, RecurrenceUnit::Week)),
        )
        .await?;
    let monthly = planner
        .add_task(
            TaskDraft::new("Pay rent")
                .with_deadline(date(2026, 10, 1))
                .with_recurrence(Recurrence::every(1, RecurrenceUnit::Month)),
        )
        .await?;
    let one_off = planner
        .add_task(TaskDraft::new("Return parcel").with_deadline(date(2026, 10, 7)))
        .await?;

    clock.set_date(date(2026, 10, 30));
    storage.clear_journal()?;
    let later = open_planner(&storage, &clock).await?;

    let deadline = |task: &Task| later.task(task.id()).map(Task::deadline);
    ensure!(deadline(&weekly) == Some(date(2026, 11, 2)));
    ensure!(deadline(&monthly) == Some(date(2026, 11, 1)));
    ensure!(deadline(&one_off) == Some(date(2026, 10, 7)));
    ensure!(storage.write_count(TASKS)? == 1, "catch-up writes once");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_priority_labels_rank_last_and_persist(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
) -> eyre::Result<()> {
    storage.seed(
        TASKS,
        json!([
            {
                "id": "0b7d4f3e-8f61-4a53-9a57-2a8c8d1c4e01",
                "title": "Imported chore",
                "deadline": "2026-10-05",
                "priority": "Urgent",
                "created_at": "2026-09-30T08:00:00Z"
            },
            {
                "id": "0b7d4f3e-8f61-4a53-9a57-2a8c8d1c4e02",
                "title": "Routine check",
                "deadline": "2026-10-09",
                "priority": "Low",
                "created_at": "2026-09-30T08:00:00Z"
            }
        ]),
    )?;
    let mut planner = open_planner(&storage, &clock).await?;

    let selection = planner.generate_today(GenerationMode::ByPriority).await?;
    ensure!(titles(selection.tasks()) == ["Routine check", "Imported chore"]);

    let first = planner
        .tasks()
        .first()
        .cloned()
        .ok_or_else(|| eyre!("imported task should load"))?;
    planner.update_task(first).await?;
    let persisted = storage
        .peek(TASKS)?
        .ok_or_else(|| eyre!("backlog should be stored"))?;
    ensure!(
        persisted.pointer("/0/priority") == Some(&Value::from("Urgent")),
        "label must round-trip unchanged"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn regenerating_replaces_the_selection(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    for day in 6..=10 {
        planner
            .add_task(
                TaskDraft::new(format!("Errand {day}")).with_deadline(date(2026, 10, day)),
            )
            .await?;
    }

    planner.generate_today(GenerationMode::Random).await?;
    let by_deadline = planner.generate_today(GenerationMode::ByDeadline).await?;

    let today = planner
        .today_selection()
        .ok_or_else(|| eyre!("selection should exist"))?;
    ensure!(today == &by_deadline);
    ensure!(titles(today.tasks()) == ["Errand 6", "Errand 7", "Errand 8"]);
    ensure!(storage.write_count(SELECTION)? == 2);
    Ok(())
}
