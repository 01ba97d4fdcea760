//! Project lifecycle orchestration.

use crate::auth::domain::EmailAddress;
use crate::project::domain::{
    Priority, Project, ProjectDomainError, ProjectDraft, ProjectId, ProjectStatus,
    newly_added_members,
};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation rejected the input.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// The project repository failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),

    /// The task repository failed during cascade.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

/// Request to create a project.
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    title: String,
    description: String,
    priority: Priority,
    owner: EmailAddress,
    members: Vec<EmailAddress>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl CreateProjectRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, owner: EmailAddress) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            owner,
            members: Vec::new(),
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the member list; the owner is always included.
    #[must_use]
    pub fn with_members(mut self, members: Vec<EmailAddress>) -> Self {
        self.members = members;
        self
    }

    /// Sets the schedule.
    #[must_use]
    pub const fn with_schedule(
        mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }
}

/// Request to edit a project's editable fields.
///
/// `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct EditProjectRequest {
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    members: Option<Vec<EmailAddress>>,
    schedule: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
}

impl EditProjectRequest {
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

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the member list; the owner is always retained.
    #[must_use]
    pub fn with_members(mut self, members: Vec<EmailAddress>) -> Self {
        self.members = Some(members);
        self
    }

    /// Replaces the schedule.
    #[must_use]
    pub const fn with_schedule(
        mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.schedule = Some((start_date, end_date));
        self
    }
}

/// Outcome of applying an edit, carrying the membership diff for
/// notification dispatch.
#[derive(Debug, Clone)]
pub struct EditedProject {
    /// The project after the edit.
    pub project: Project,
    /// Addresses that joined with this edit.
    pub added_members: Vec<EmailAddress>,
}

/// Project lifecycle orchestration over the project and task repositories.
#[derive(Clone)]
pub struct ProjectLifecycleService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<P, T, C> ProjectLifecycleService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            clock,
        }
    }

    /// Creates a project in the to-do column.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] for rejected input and
    /// [`ProjectServiceError::Repository`] for persistence failures.
    pub async fn create(
        &self,
        request: CreateProjectRequest,
    ) -> Result<Project, ProjectServiceError> {
        let project = Project::create(
            ProjectDraft {
                title: request.title,
                description: request.description,
                priority: request.priority,
                owner: request.owner,
                members: request.members,
                start_date: request.start_date,
                end_date: request.end_date,
            },
            self.clock.as_ref(),
        )?;
        self.projects.create(&project).await?;
        Ok(project)
    }

    /// Applies an edit request to an existing project.
    ///
    /// Returns the updated project together with the addresses the edit
    /// added to the membership, for notification dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist and domain or repository errors otherwise.
    pub async fn edit(
        &self,
        id: ProjectId,
        request: EditProjectRequest,
    ) -> Result<EditedProject, ProjectServiceError> {
        let mut project = self.require(id).await?;
        let previous_members = project.members().to_vec();

        if let Some(title) = &request.title {
            project.rename(title)?;
        }
        if let Some(description) = request.description {
            project.set_description(description);
        }
        if let Some(priority) = request.priority {
            project.set_priority(priority);
        }
        if let Some(members) = request.members {
            project.set_members(members);
        }
        if let Some((start_date, end_date)) = request.schedule {
            project.set_schedule(start_date, end_date)?;
        }

        self.projects.update_details(&project).await?;
        let added_members = newly_added_members(&previous_members, project.members());
        Ok(EditedProject {
            project,
            added_members,
        })
    }

    /// Moves a project to another board column.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn change_status(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> Result<(), ProjectServiceError> {
        self.projects.update_status(id, status).await?;
        Ok(())
    }

    /// Changes a project's priority.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn change_priority(
        &self,
        id: ProjectId,
        priority: Priority,
    ) -> Result<(), ProjectServiceError> {
        self.projects.update_priority(id, priority).await?;
        Ok(())
    }

    /// Archives a project, hiding it from the active board.
    ///
    /// Tasks are untouched; archiving is reversible.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn archive(&self, id: ProjectId) -> Result<(), ProjectServiceError> {
        self.projects.set_archived(id, true).await?;
        Ok(())
    }

    /// Restores an archived project to the active board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn unarchive(&self, id: ProjectId) -> Result<(), ProjectServiceError> {
        self.projects.set_archived(id, false).await?;
        Ok(())
    }

    /// Permanently deletes a project and every task under it.
    ///
    /// The task cascade runs first so a failure leaves the project record
    /// in place and retryable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn delete(&self, id: ProjectId) -> Result<(), ProjectServiceError> {
        self.require(id).await?;
        self.tasks.delete_by_project(id).await?;
        self.projects.delete(id).await?;
        Ok(())
    }

    async fn require(&self, id: ProjectId) -> Result<Project, ProjectServiceError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))
    }
}
