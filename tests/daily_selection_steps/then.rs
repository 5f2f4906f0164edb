//! Then steps for daily selection BDD scenarios.

use super::world::{SelectionWorld, parse_date};
use eyre::{ensure, eyre};
use power_of_three::task::domain::Task;
use rstest_bdd_macros::then;

fn find_task<'a>(world: &'a SelectionWorld, title: &str) -> Result<&'a Task, eyre::Report> {
    let id = world.task_id(title)?;
    world
        .planner()?
        .task(id)
        .ok_or_else(|| eyre!("task '{title}' disappeared from backlog"))
}

#[then(r#"today's selection lists "{titles}""#)]
fn selection_lists(world: &SelectionWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let selection = world
        .planner()?
        .today_selection()
        .ok_or_else(|| eyre!("expected a selection for today"))?;
    let actual: Vec<&str> = selection.tasks().iter().map(Task::title).collect();
    ensure!(
        actual == expected,
        "expected selection {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the task "{title}" is due on {deadline}"#)]
fn task_is_due_on(
    world: &SelectionWorld,
    title: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    let expected = parse_date(&deadline)?;
    let task = find_task(world, &title)?;
    ensure!(
        task.deadline() == expected,
        "expected '{title}' due on {expected}, found {}",
        task.deadline()
    );
    Ok(())
}

#[then(r#"the task "{title}" is open"#)]
fn task_is_open(world: &SelectionWorld, title: String) -> Result<(), eyre::Report> {
    let task = find_task(world, &title)?;
    ensure!(!task.is_completed(), "expected '{title}' to be open");
    Ok(())
}

#[then("there is no selection for today")]
fn no_selection(world: &SelectionWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.planner()?.today_selection().is_none(),
        "expected no selection for today"
    );
    Ok(())
}

#[then("the stored selection has been removed")]
fn stored_selection_removed(world: &SelectionWorld) -> Result<(), eyre::Report> {
    ensure!(world.storage.peek("todaySelection")?.is_none());
    ensure!(world.storage.removal_count("todaySelection")? == 1);
    Ok(())
}

#[then("the backlog holds {count:usize} task")]
fn backlog_holds(world: &SelectionWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.planner()?.tasks().len();
    ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}
