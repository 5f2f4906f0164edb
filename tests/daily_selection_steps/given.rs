//! Given steps for daily selection BDD scenarios.

use super::world::{SelectionWorld, parse_date, run_async};
use eyre::{WrapErr, eyre};
use power_of_three::selection::domain::GenerationMode;
use power_of_three::task::domain::{Priority, Recurrence, RecurrenceUnit, TaskDraft};
use rstest_bdd_macros::given;

#[given("today is {day}")]
fn today_is(world: &mut SelectionWorld, day: String) -> Result<(), eyre::Report> {
    let today = parse_date(&day)?;
    world.open_on(today)
}

#[given(r#"a "{priority}" priority task "{title}" due on {deadline}"#)]
fn prioritised_task(
    world: &mut SelectionWorld,
    priority: String,
    title: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new(title)
        .with_priority(Priority::from_label(&priority))
        .with_deadline(parse_date(&deadline)?);
    run_async(world.planner_mut()?.add_task(draft)).wrap_err("add task for scenario")?;
    Ok(())
}

#[given(r#"a task "{title}" due on {deadline} repeating every {interval:i64} {unit}"#)]
fn recurring_task(
    world: &mut SelectionWorld,
    title: String,
    deadline: String,
    interval: i64,
    unit: String,
) -> Result<(), eyre::Report> {
    let unit = match unit.trim() {
        "day" | "days" => RecurrenceUnit::Day,
        "week" | "weeks" => RecurrenceUnit::Week,
        "month" | "months" => RecurrenceUnit::Month,
        "year" | "years" => RecurrenceUnit::Year,
        other => return Err(eyre!("unknown recurrence unit in scenario: {other}")),
    };
    let draft = TaskDraft::new(title)
        .with_deadline(parse_date(&deadline)?)
        .with_recurrence(Recurrence::every(interval, unit));
    run_async(world.planner_mut()?.add_task(draft)).wrap_err("add recurring task for scenario")?;
    Ok(())
}

#[given(r#"today's selection is generated with mode "{mode}""#)]
fn selection_generated(world: &mut SelectionWorld, mode: String) -> Result<(), eyre::Report> {
    let mode = GenerationMode::try_from(mode.as_str())?;
    run_async(world.planner_mut()?.generate_today(mode))
        .wrap_err("generate selection in scenario setup")?;
    Ok(())
}
