//! Task lifecycle orchestration.
//!
//! Creation and editing check the assignee list against the parent
//! project's membership; the repository is only contacted once the
//! invariant holds, so a rejected request leaves no partial write behind.

use crate::auth::domain::EmailAddress;
use crate::project::domain::{Priority, ProjectId};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskStatus};
use crate::task::ports::{
    CommentRepository, CommentRepositoryError, TaskRepository, TaskRepositoryError,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation rejected the input.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The parent project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// An assignee is not a member of the parent project.
    #[error("{assignee} is not a member of the project")]
    AssigneeNotMember {
        /// The rejected address.
        assignee: EmailAddress,
    },

    /// The project repository failed.
    #[error(transparent)]
    Project(#[from] ProjectRepositoryError),

    /// The task repository failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The comment repository failed during cascade.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),
}

/// Request to create a task under a project.
#[derive(Debug, Clone)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: String,
    notes: Option<String>,
    priority: Priority,
    due_date: Option<NaiveDate>,
    assignees: Vec<EmailAddress>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: String::new(),
            notes: None,
            priority: Priority::Medium,
            due_date: None,
            assignees: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the working notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee list.
    #[must_use]
    pub fn with_assignees(mut self, assignees: Vec<EmailAddress>) -> Self {
        self.assignees = assignees;
        self
    }
}

/// Request to edit a task's editable fields.
///
/// `None` fields keep their current value; assignees and notes replace
/// wholesale when given.
#[derive(Debug, Clone, Default)]
pub struct EditTaskRequest {
    title: Option<String>,
    description: Option<String>,
    notes: Option<Option<String>>,
    priority: Option<Priority>,
    due_date: Option<Option<NaiveDate>>,
    assignees: Option<Vec<EmailAddress>>,
}

impl EditTaskRequest {
    /// Creates an empty edit request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces or clears the working notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the assignee list.
    #[must_use]
    pub fn with_assignees(mut self, assignees: Vec<EmailAddress>) -> Self {
        self.assignees = Some(assignees);
        self
    }
}

/// Task lifecycle orchestration over the task and project repositories.
#[derive(Clone)]
pub struct TaskLifecycleService<P, T, M, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    comments: Arc<M>,
    clock: Arc<C>,
}

impl<P, T, M, C> TaskLifecycleService<P, T, M, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, comments: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            comments,
            clock,
        }
    }

    /// Creates a task under its parent project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the parent does
    /// not exist, [`TaskServiceError::AssigneeNotMember`] when an assignee
    /// is outside the project's membership, and domain or repository
    /// errors otherwise.
    pub async fn create(&self, request: CreateTaskRequest) -> Result<Task, TaskServiceError> {
        let project = self
            .projects
            .find_by_id(request.project_id)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(request.project_id))?;
        check_membership(&project, &request.assignees)?;

        let task = Task::create(
            TaskDraft {
                project_id: request.project_id,
                title: request.title,
                description: request.description,
                notes: request.notes,
                priority: request.priority,
                due_date: request.due_date,
                assignees: request.assignees,
            },
            self.clock.as_ref(),
        )?;
        self.tasks.create(&task).await?;
        Ok(task)
    }

    /// Applies an edit request to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist, [`TaskServiceError::AssigneeNotMember`] when a new assignee
    /// is outside the project's membership, and domain or repository
    /// errors otherwise.
    pub async fn edit(&self, id: TaskId, request: EditTaskRequest) -> Result<Task, TaskServiceError> {
        let mut task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        if let Some(assignees) = &request.assignees {
            let project = self
                .projects
                .find_by_id(task.project_id())
                .await?
                .ok_or(TaskServiceError::ProjectNotFound(task.project_id()))?;
            check_membership(&project, assignees)?;
        }

        if let Some(title) = &request.title {
            task.rename(title)?;
        }
        if let Some(description) = request.description {
            task.set_description(description);
        }
        if let Some(notes) = request.notes {
            task.set_notes(notes);
        }
        if let Some(priority) = request.priority {
            task.set_priority(priority);
        }
        if let Some(due_date) = request.due_date {
            task.set_due_date(due_date);
        }
        if let Some(assignees) = request.assignees {
            task.set_assignees(assignees);
        }

        self.tasks.update_details(&task).await?;
        Ok(task)
    }

    /// Moves a task to another kanban column.
    ///
    /// Entering the completed column stamps the completion time from the
    /// service clock; leaving it clears the stamp. Both fields travel in
    /// one write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn change_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> Result<Task, TaskServiceError> {
        let mut task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;
        task.set_status(status, self.clock.as_ref());
        self.tasks
            .update_status(id, status, task.completed_at())
            .await?;
        Ok(task)
    }

    /// Deletes a task together with its comment thread.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn delete(&self, id: TaskId) -> Result<(), TaskServiceError> {
        self.comments.delete_by_task(id).await?;
        self.tasks.delete(id).await?;
        Ok(())
    }
}

/// Verifies every assignee belongs to the project.
fn check_membership(
    project: &crate::project::domain::Project,
    assignees: &[EmailAddress],
) -> Result<(), TaskServiceError> {
    for assignee in assignees {
        if !project.has_member(assignee) {
            return Err(TaskServiceError::AssigneeNotMember {
                assignee: assignee.clone(),
            });
        }
    }
    Ok(())
}
