//! Derived dashboard counters.

use crate::project::domain::Priority;
use crate::task::domain::{Task, TaskStatus};
use chrono::NaiveDate;

/// Counters shown on the board dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    /// All tasks.
    pub total: usize,
    /// Tasks in the completed column.
    pub completed: usize,
    /// Tasks in the in-progress column.
    pub in_progress: usize,
    /// Open tasks past their due date, plus tasks already marked overdue.
    pub overdue: usize,
    /// Tasks at high priority.
    pub high_priority: usize,
    /// Rounded completion percentage; 0 when there are no tasks.
    pub progress: u8,
}

/// Derives the dashboard counters from the current task list.
#[must_use]
pub fn aggregate(tasks: &[Task], today: NaiveDate) -> BoardStats {
    let total = tasks.len();
    let completed = tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::Completed)
        .count();
    let in_progress = tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::InProgress)
        .count();
    let overdue = tasks.iter().filter(|task| task.is_overdue(today)).count();
    let high_priority = tasks
        .iter()
        .filter(|task| task.priority() == Priority::High)
        .count();

    BoardStats {
        total,
        completed,
        in_progress,
        overdue,
        high_priority,
        progress: rounded_percentage(completed, total),
    }
}

/// Rounded integer percentage, 0 when the denominator is 0.
fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    #[expect(
        clippy::integer_division,
        reason = "half-up rounding over the adjusted numerator"
    )]
    let percent = (part * 100 + whole / 2) / whole;
    u8::try_from(percent).unwrap_or(u8::MAX)
}
