//! Pure kanban grouping into ordered status columns.

use crate::project::domain::{Project, ProjectStatus};
use crate::task::domain::{Task, TaskStatus};

/// Fixed left-to-right order of the project board columns.
const PROJECT_COLUMN_ORDER: [ProjectStatus; 3] = [
    ProjectStatus::ToDo,
    ProjectStatus::InProgress,
    ProjectStatus::Done,
];

/// Fixed left-to-right order of the task board columns.
const TASK_COLUMN_ORDER: [TaskStatus; 4] = [
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed,
    TaskStatus::Overdue,
];

/// One column of the project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectColumn {
    /// Status this column renders.
    pub status: ProjectStatus,
    /// Cards in the column, in the input order.
    pub projects: Vec<Project>,
}

/// One column of a project's task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskColumn {
    /// Status this column renders.
    pub status: TaskStatus,
    /// Cards in the column, in the input order.
    pub tasks: Vec<Task>,
}

/// Groups projects into the board's ordered columns.
///
/// Columns without cards are still present so the board renders every
/// drop target.
#[must_use]
pub fn project_columns(projects: &[Project]) -> Vec<ProjectColumn> {
    PROJECT_COLUMN_ORDER
        .into_iter()
        .map(|status| ProjectColumn {
            status,
            projects: projects
                .iter()
                .filter(|project| project.status() == status)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Groups tasks into the board's ordered columns.
///
/// Columns without cards are still present so the board renders every
/// drop target.
#[must_use]
pub fn task_columns(tasks: &[Task]) -> Vec<TaskColumn> {
    TASK_COLUMN_ORDER
        .into_iter()
        .map(|status| TaskColumn {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.status() == status)
                .cloned()
                .collect(),
        })
        .collect()
}
