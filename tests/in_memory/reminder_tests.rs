//! In-memory integration tests for the reminder projection.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{clock, open_planner, storage};
use crate::test_helpers::FixedClock;
use eyre::{ensure, eyre};
use power_of_three::reminder::{
    adapters::memory::InMemoryReminderSink,
    domain::{Reminder, ReminderEntry, ReminderSnapshot},
    ports::ReminderSink,
    services::{ReminderChecker, ReminderConfig, ReminderMirror},
};
use power_of_three::selection::domain::GenerationMode;
use power_of_three::task::{adapters::memory::InMemoryKeyValueStore, domain::TaskDraft};
use rstest::{fixture, rstest};

#[fixture]
fn sink() -> Arc<InMemoryReminderSink> {
    Arc::new(InMemoryReminderSink::new())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mirrored_selection_reminds_about_first_open_task(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
    sink: Arc<InMemoryReminderSink>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    for title in ["Book dentist", "Renew insurance", "Fix bike light"] {
        planner.add_task(TaskDraft::new(title)).await?;
    }
    let selection = planner.generate_today(GenerationMode::ByDeadline).await?;
    let first = selection
        .tasks()
        .first()
        .ok_or_else(|| eyre!("selection should not be empty"))?;
    planner.complete_task(first.id()).await?;

    let mirror = ReminderMirror::new(Arc::clone(&sink), ReminderConfig::default());
    mirror.mirror(planner.today_selection()).await?;
    let reminder = ReminderChecker::new(Arc::clone(&sink), ReminderConfig::default())
        .check()
        .await?
        .ok_or_else(|| eyre!("an open task should trigger a reminder"))?;

    ensure!(reminder.title == Reminder::TITLE);
    ensure!(reminder.body == "Don't forget: Renew insurance");
    ensure!(reminder.tag == Reminder::TAG);
    ensure!(sink.check_requests() == 1, "mirroring requests a re-check");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finished_day_raises_no_reminder(
    storage: Arc<InMemoryKeyValueStore>,
    clock: Arc<FixedClock>,
    sink: Arc<InMemoryReminderSink>,
) -> eyre::Result<()> {
    let mut planner = open_planner(&storage, &clock).await?;
    planner.add_task(TaskDraft::new("Water plants")).await?;
    let selection = planner.generate_today(GenerationMode::Random).await?;
    for task in selection.tasks() {
        planner.complete_task(task.id()).await?;
    }

    let config = ReminderConfig::default();
    ReminderMirror::new(Arc::clone(&sink), config.clone())
        .mirror(planner.today_selection())
        .await?;
    let reminder = ReminderChecker::new(Arc::clone(&sink), config).check().await?;

    ensure!(reminder.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cleared_selection_publishes_empty_snapshot(
    sink: Arc<InMemoryReminderSink>,
) -> eyre::Result<()> {
    let config = ReminderConfig::default();
    ReminderMirror::new(Arc::clone(&sink), config.clone())
        .mirror(None)
        .await?;

    let published = sink
        .snapshot(&config.store_key)
        .await?
        .ok_or_else(|| eyre!("an empty snapshot is still published"))?;
    ensure!(published.entries().is_empty());
    ensure!(
        ReminderChecker::new(Arc::clone(&sink), config)
            .check()
            .await?
            .is_none()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checker_without_snapshot_stays_quiet(sink: Arc<InMemoryReminderSink>) -> eyre::Result<()> {
    let checker = ReminderChecker::new(sink, ReminderConfig::default());

    ensure!(checker.check().await?.is_none());
    ensure!(checker.check_interval() == Duration::from_secs(3600));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_key_and_interval_are_honoured(sink: Arc<InMemoryReminderSink>) -> eyre::Result<()> {
    let config = ReminderConfig {
        store_key: "eveningReminders".to_owned(),
        ..ReminderConfig::default()
    }
    .with_check_interval(Duration::from_secs(15 * 60));
    sink.publish(
        "eveningReminders",
        &ReminderSnapshot::new(vec![ReminderEntry {
            title: "Lock the shed".to_owned(),
            is_completed: false,
        }]),
    )
    .await?;

    let checker = ReminderChecker::new(Arc::clone(&sink), config);
    let reminder = checker
        .check()
        .await?
        .ok_or_else(|| eyre!("snapshot under the custom key should be read"))?;

    ensure!(reminder.body == "Don't forget: Lock the shed");
    ensure!(checker.check_interval() == Duration::from_secs(900));
    Ok(())
}

#[rstest]
fn snapshot_uses_camel_case_fields() -> eyre::Result<()> {
    let snapshot = ReminderSnapshot::new(vec![ReminderEntry {
        title: "Stretch".to_owned(),
        is_completed: true,
    }]);

    let encoded = serde_json::to_value(&snapshot)?;

    ensure!(encoded["entries"][0]["isCompleted"] == serde_json::Value::Bool(true));
    Ok(())
}
