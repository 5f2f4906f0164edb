//! Selection strategies.
//!
//! Each strategy receives the eligible pool (open backlog tasks, in backlog
//! order) and returns at most [`DAILY_LIMIT`] copies. All sorts are stable,
//! so tasks that compare equal keep their backlog order.

use super::GenerationMode;
use crate::task::domain::{Priority, Task, TaskId};
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

/// Number of tasks in a full daily selection.
pub const DAILY_LIMIT: usize = 3;

/// Picks today's tasks from `pool` using `mode`.
///
/// `rng` is only consulted by [`GenerationMode::Random`]. A pool smaller
/// than [`DAILY_LIMIT`] yields a shorter selection.
pub fn select<R>(mode: GenerationMode, pool: &[Task], rng: &mut R) -> Vec<Task>
where
    R: Rng + ?Sized,
{
    match mode {
        GenerationMode::Random => select_random(pool, rng),
        GenerationMode::ByPriority => select_by_priority(pool),
        GenerationMode::ByDeadline => select_by_deadline(pool),
        GenerationMode::Balanced => select_balanced(pool),
    }
}

fn select_random<R>(pool: &[Task], rng: &mut R) -> Vec<Task>
where
    R: Rng + ?Sized,
{
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(DAILY_LIMIT);
    shuffled
}

fn select_by_priority(pool: &[Task]) -> Vec<Task> {
    let mut ranked: Vec<&Task> = pool.iter().collect();
    ranked.sort_by(|left, right| {
        right
            .priority()
            .weight()
            .cmp(&left.priority().weight())
            .then_with(|| left.deadline().cmp(&right.deadline()))
    });
    take_limit(ranked)
}

fn select_by_deadline(pool: &[Task]) -> Vec<Task> {
    let mut ranked: Vec<&Task> = pool.iter().collect();
    ranked.sort_by_key(|task| task.deadline());
    take_limit(ranked)
}

/// One earliest-deadline representative per tier (High, Medium, Low), then
/// the remaining pool by descending weight. Picked tasks are excluded from
/// the top-up by identifier.
fn select_balanced(pool: &[Task]) -> Vec<Task> {
    let mut picked: Vec<&Task> = Priority::TIERS
        .iter()
        .filter_map(|tier| {
            pool.iter()
                .filter(|task| task.priority() == tier)
                .min_by_key(|task| task.deadline())
        })
        .collect();

    if picked.len() < DAILY_LIMIT {
        let picked_ids: Vec<TaskId> = picked.iter().map(|task| task.id()).collect();
        let mut remaining: Vec<&Task> = pool
            .iter()
            .filter(|task| !picked_ids.contains(&task.id()))
            .collect();
        remaining.sort_by_key(|task| Reverse(task.priority().weight()));
        let open_slots = DAILY_LIMIT - picked.len();
        picked.extend(remaining.into_iter().take(open_slots));
    }

    take_limit(picked)
}

fn take_limit(ranked: Vec<&Task>) -> Vec<Task> {
    ranked.into_iter().take(DAILY_LIMIT).cloned().collect()
}
