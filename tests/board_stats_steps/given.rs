//! Given steps for the dashboard statistics scenarios.

use super::world::StatsWorld;
use chrono::{Duration, NaiveDate};
use mockable::DefaultClock;
use pegboard::project::domain::{Priority, ProjectId};
use pegboard::task::domain::{Task, TaskDraft, TaskStatus};
use rstest_bdd_macros::given;

fn task(
    status: TaskStatus,
    priority: Priority,
    due: Option<NaiveDate>,
) -> Result<Task, eyre::Report> {
    let mut task = Task::create(
        TaskDraft {
            project_id: ProjectId::new(),
            title: "Card".to_owned(),
            description: String::new(),
            notes: None,
            priority,
            due_date: due,
            assignees: Vec::new(),
        },
        &DefaultClock,
    )
    .map_err(|err| eyre::eyre!("create task for stats scenario: {err}"))?;
    task.set_status(status, &DefaultClock);
    Ok(task)
}

#[given("a board with 10 tasks where 5 are completed, 2 are overdue, and 3 are high priority")]
fn reference_board(world: &mut StatsWorld) -> Result<(), eyre::Report> {
    let yesterday = world.today - Duration::days(1);
    let mut tasks = Vec::new();
    for _ in 0..5 {
        tasks.push(task(TaskStatus::Completed, Priority::Low, None)?);
    }
    // The two overdue open tasks are also two of the three high-priority ones.
    tasks.push(task(TaskStatus::Pending, Priority::High, Some(yesterday))?);
    tasks.push(task(TaskStatus::Overdue, Priority::High, None)?);
    tasks.push(task(TaskStatus::InProgress, Priority::High, None)?);
    tasks.push(task(TaskStatus::Pending, Priority::Low, None)?);
    tasks.push(task(TaskStatus::Pending, Priority::Low, None)?);
    world.tasks = tasks;
    Ok(())
}

#[given("a board with no tasks")]
fn empty_board(world: &mut StatsWorld) {
    world.tasks.clear();
}
