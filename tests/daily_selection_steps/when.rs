//! When steps for daily selection BDD scenarios.

use super::world::{SelectionWorld, parse_date, run_async};
use eyre::{WrapErr, ensure};
use power_of_three::selection::domain::GenerationMode;
use rstest_bdd_macros::when;

#[when(r#"today's selection is generated with mode "{mode}""#)]
fn generate_selection(world: &mut SelectionWorld, mode: String) -> Result<(), eyre::Report> {
    let mode = GenerationMode::try_from(mode.as_str())?;
    run_async(world.planner_mut()?.generate_today(mode)).wrap_err("generate selection")?;
    Ok(())
}

#[when(r#"the task "{title}" is completed"#)]
fn complete_task(world: &mut SelectionWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let stored =
        run_async(world.planner_mut()?.complete_task(id)).wrap_err("complete task in scenario")?;
    ensure!(stored.is_some(), "task '{title}' was already complete");
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut SelectionWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let removed =
        run_async(world.planner_mut()?.delete_task(id)).wrap_err("delete task in scenario")?;
    ensure!(removed, "task '{title}' was not in the backlog");
    Ok(())
}

#[when("the planner is reopened on {day}")]
fn reopen_planner(world: &mut SelectionWorld, day: String) -> Result<(), eyre::Report> {
    world.planner = None;
    world.storage.clear_journal()?;
    world.open_on(parse_date(&day)?)
}
