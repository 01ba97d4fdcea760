//! Repository port for project persistence and live queries.

use crate::auth::domain::EmailAddress;
use crate::project::domain::{Priority, Project, ProjectId, ProjectStatus};
use crate::store::Subscription;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Callback invoked with the full current project result set.
pub type ProjectObserver = Arc<dyn Fn(&[Project]) + Send + Sync>;

/// Filter predicate for project queries and subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Restrict to archived (`Some(true)`) or active (`Some(false)`)
    /// projects; `None` matches both.
    pub archived: Option<bool>,
    /// Restrict to projects the address owns or belongs to.
    pub member: Option<EmailAddress>,
}

impl ProjectFilter {
    /// Filter matching every project.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            archived: None,
            member: None,
        }
    }

    /// Restricts the filter to active (non-archived) projects.
    #[must_use]
    pub const fn active(mut self) -> Self {
        self.archived = Some(false);
        self
    }

    /// Restricts the filter to archived projects.
    #[must_use]
    pub const fn archived_only(mut self) -> Self {
        self.archived = Some(true);
        self
    }

    /// Restricts the filter to projects the address belongs to.
    #[must_use]
    pub fn for_member(mut self, member: EmailAddress) -> Self {
        self.member = Some(member);
        self
    }
}

/// Project persistence contract.
///
/// Single-field updates mirror the remote store's field-level
/// last-writer-wins semantics; concurrent writers are resolved by the
/// backend, not here.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the
    /// identifier already exists.
    async fn create(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Persists an edited project (title, description, priority, schedule,
    /// members).
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn update_details(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Updates only the status field.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn update_status(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> ProjectRepositoryResult<()>;

    /// Updates only the priority field.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn update_priority(&self, id: ProjectId, priority: Priority)
    -> ProjectRepositoryResult<()>;

    /// Sets or clears only the archived flag.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn set_archived(&self, id: ProjectId, archived: bool) -> ProjectRepositoryResult<()>;

    /// Removes the project record.
    ///
    /// Task cascade is orchestrated by the calling service.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;

    /// Clears the archived flag on every archived project in one bulk
    /// write and returns how many were touched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// inaccessible.
    async fn unarchive_all(&self) -> ProjectRepositoryResult<usize>;

    /// Removes every archived project in one bulk write and returns their
    /// identifiers for task cascade.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// inaccessible.
    async fn delete_archived(&self) -> ProjectRepositoryResult<Vec<ProjectId>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::MalformedDocument`] when the
    /// stored document cannot be decoded.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns all projects matching the filter, newest first.
    async fn list(&self, filter: &ProjectFilter) -> ProjectRepositoryResult<Vec<Project>>;

    /// Establishes a live query over projects matching the filter.
    ///
    /// The observer receives the full current result set immediately and
    /// after every change, newest first, until the handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// inaccessible.
    fn watch(
        &self,
        filter: ProjectFilter,
        observer: ProjectObserver,
    ) -> ProjectRepositoryResult<Subscription>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// The stored document does not decode into a project.
    #[error("malformed project document {id}: {reason}")]
    MalformedDocument {
        /// Identifier of the offending document.
        id: ProjectId,
        /// Decode failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
