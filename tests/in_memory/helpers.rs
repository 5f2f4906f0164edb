//! Shared test helpers for in-memory planner integration tests.

use crate::test_helpers::{FixedClock, date};
use power_of_three::selection::services::{DailyPlanner, PlannerConfig, PlannerResult};
use power_of_three::task::adapters::memory::InMemoryKeyValueStore;
use rstest::fixture;
use std::sync::Arc;

/// Planner wired to in-memory storage and a fixed clock.
pub type MemoryPlanner = DailyPlanner<InMemoryKeyValueStore, FixedClock>;

/// Provides fresh storage for each test.
#[fixture]
pub fn storage() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Provides a clock pinned to Monday 5 October 2026.
#[fixture]
pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::on(date(2026, 10, 5)))
}

/// Loads a planner session over `storage` with default configuration.
///
/// # Errors
///
/// Returns the planner error when loading fails.
pub async fn open_planner(
    storage: &Arc<InMemoryKeyValueStore>,
    clock: &Arc<FixedClock>,
) -> PlannerResult<MemoryPlanner> {
    DailyPlanner::load(
        Arc::clone(storage),
        Arc::clone(clock),
        PlannerConfig::default(),
    )
    .await
}
