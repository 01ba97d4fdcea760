//! Archive-wide bulk actions gated by user confirmation.
//!
//! Both actions ask the confirmation gate before touching the repository;
//! a declined prompt results in zero writes.

use crate::project::domain::{Project, ProjectId};
use crate::project::ports::{ConfirmationGate, ProjectFilter, ProjectRepository};
use crate::project::services::ProjectServiceError;
use crate::task::ports::TaskRepository;
use std::sync::Arc;

/// Result of a confirmed-or-declined bulk action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The user declined the prompt; nothing was written.
    Declined,
    /// The action ran and touched this many projects.
    Completed {
        /// Number of projects affected.
        affected: usize,
    },
}

impl BulkOutcome {
    /// Returns whether the action actually ran.
    #[must_use]
    pub const fn ran(self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Bulk actions over the archived project set.
#[derive(Clone)]
pub struct ArchiveBulkService<P, T, G>
where
    P: ProjectRepository,
    T: TaskRepository,
    G: ConfirmationGate,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    gate: Arc<G>,
}

impl<P, T, G> ArchiveBulkService<P, T, G>
where
    P: ProjectRepository,
    T: TaskRepository,
    G: ConfirmationGate,
{
    /// Creates a new bulk action service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, gate: Arc<G>) -> Self {
        Self {
            projects,
            tasks,
            gate,
        }
    }

    /// Restores every archived project after confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the bulk write
    /// fails.
    pub async fn unarchive_all(&self) -> Result<BulkOutcome, ProjectServiceError> {
        if !self.gate.confirm("Restore all archived projects?") {
            return Ok(BulkOutcome::Declined);
        }
        let affected = self.projects.unarchive_all().await?;
        Ok(BulkOutcome::Completed { affected })
    }

    /// Permanently deletes every archived project and its tasks after
    /// confirmation.
    ///
    /// The task cascade runs first so a failure leaves the archived set
    /// in place and the action retryable.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] or
    /// [`ProjectServiceError::Tasks`] when a bulk write fails.
    pub async fn delete_all_archived(&self) -> Result<BulkOutcome, ProjectServiceError> {
        if !self
            .gate
            .confirm("Permanently delete all archived projects and their tasks?")
        {
            return Ok(BulkOutcome::Declined);
        }
        let archived = self
            .projects
            .list(&ProjectFilter::any().archived_only())
            .await?;
        let ids: Vec<ProjectId> = archived.iter().map(Project::id).collect();
        self.tasks.delete_by_projects(&ids).await?;
        let deleted = self.projects.delete_archived().await?;
        Ok(BulkOutcome::Completed {
            affected: deleted.len(),
        })
    }
}
