//! Repository port for task persistence and live queries.

use crate::project::domain::ProjectId;
use crate::store::Subscription;
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Callback invoked with the full current task result set.
pub type TaskObserver = Arc<dyn Fn(&[Task]) + Send + Sync>;

/// Filter predicate for task queries and subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Restrict to tasks belonging to the project.
    pub project: Option<ProjectId>,
    /// Restrict to tasks in the column.
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Filter matching every task.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            project: None,
            status: None,
        }
    }

    /// Restricts the filter to one project's tasks.
    #[must_use]
    pub const fn for_project(mut self, project: ProjectId) -> Self {
        self.project = Some(project);
        self
    }

    /// Restricts the filter to one kanban column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Task persistence contract.
///
/// Status changes travel as one merged write carrying both the status and
/// the completion timestamp so observers never see the pair half-updated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier
    /// already exists.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists an edited task (title, description, notes, priority, due
    /// date, assignees).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Updates the status and completion timestamp in one write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> TaskRepositoryResult<()>;

    /// Removes the task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Removes every task under the project and returns how many went.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// inaccessible.
    async fn delete_by_project(&self, project: ProjectId) -> TaskRepositoryResult<usize>;

    /// Removes every task under any of the projects in one bulk write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// inaccessible.
    async fn delete_by_projects(&self, projects: &[ProjectId]) -> TaskRepositoryResult<usize>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::MalformedDocument`] when the stored
    /// document cannot be decoded.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks under the project, newest first.
    async fn list_by_project(&self, project: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Establishes a live query over tasks matching the filter.
    ///
    /// The observer receives the full current result set immediately and
    /// after every change, newest first, until the handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// inaccessible.
    fn watch(&self, filter: TaskFilter, observer: TaskObserver)
    -> TaskRepositoryResult<Subscription>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored document does not decode into a task.
    #[error("malformed task document {id}: {reason}")]
    MalformedDocument {
        /// Identifier of the offending document.
        id: TaskId,
        /// Decode failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
