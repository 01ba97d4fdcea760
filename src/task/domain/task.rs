//! Task aggregate root and its status enumeration.

use super::{ParseTaskStatusError, Priority, TaskDomainError, TaskId};
use crate::auth::domain::EmailAddress;
use crate::project::domain::{ProjectId, ProjectStatus};
use crate::store::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task kanban status.
///
/// Deliberately a different enumeration from [`ProjectStatus`]: the source
/// data kept separate vocabularies per entity, and coercing between them
/// silently caused bugs. [`TaskStatus::as_project_status`] is the single
/// documented mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
    /// The due date passed without completion.
    Overdue,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Maps this task status onto the coarser project vocabulary.
    ///
    /// Overdue work is still in progress from the project's point of view.
    #[must_use]
    pub const fn as_project_status(self) -> ProjectStatus {
        match self {
            Self::Pending => ProjectStatus::ToDo,
            Self::InProgress | Self::Overdue => ProjectStatus::InProgress,
            Self::Completed => ProjectStatus::Done,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Parent project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional working notes.
    pub notes: Option<String>,
    /// Initial priority.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Assigned member addresses.
    pub assignees: Vec<EmailAddress>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted parent project reference.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted working notes.
    pub notes: Option<String>,
    /// Persisted kanban status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted assignee list.
    pub assignees: Vec<EmailAddress>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: String,
    notes: Option<String>,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    completed_at: Option<DateTime<Utc>>,
    assignees: Vec<EmailAddress>,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title trims to
    /// nothing.
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = validate_title(&draft.title)?;
        let mut assignees = draft.assignees;
        assignees.sort();
        assignees.dedup();
        Ok(Self {
            id: TaskId::new(),
            project_id: draft.project_id,
            title,
            description: draft.description,
            notes: draft.notes,
            status: TaskStatus::Pending,
            due_date: draft.due_date,
            completed_at: None,
            assignees,
            priority: draft.priority,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            notes: data.notes,
            status: data.status,
            due_date: data.due_date,
            completed_at: data.completed_at,
            assignees: data.assignees,
            priority: data.priority,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the parent project reference.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the working notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the kanban status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the assignee list in normalized order.
    #[must_use]
    pub fn assignees(&self) -> &[EmailAddress] {
        &self.assignees
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task to another column.
    ///
    /// Entering [`TaskStatus::Completed`] records the completion
    /// timestamp; leaving it clears the timestamp again.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Completed => Some(clock.utc()),
            _ => None,
        };
    }

    /// Renames the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the new title trims to
    /// nothing.
    pub fn rename(&mut self, title: &str) -> Result<(), TaskDomainError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces or clears the working notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    /// Replaces or clears the due date.
    pub const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Changes the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replaces the assignee list.
    pub fn set_assignees(&mut self, assignees: Vec<EmailAddress>) {
        let mut normalized = assignees;
        normalized.sort();
        normalized.dedup();
        self.assignees = normalized;
    }

    /// Returns whether the task counts as overdue on the given day.
    ///
    /// Completed work is never overdue, whatever its due date says.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status == TaskStatus::Completed {
            return false;
        }
        if self.status == TaskStatus::Overdue {
            return true;
        }
        self.due_date.is_some_and(|due| due < today)
    }
}

impl Identified for Task {
    fn ident(&self) -> Uuid {
        self.id.into_inner()
    }
}

fn validate_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
