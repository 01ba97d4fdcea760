//! Write port the drag-drop coordinator drops through.

use crate::project::domain::{ProjectId, ProjectStatus};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Error returned when a board write is rejected by the backend.
#[derive(Debug, Clone, Error)]
#[error("board write rejected: {0}")]
pub struct BoardWriteError(pub String);

/// Result type for board write operations.
pub type BoardWriteResult = Result<(), BoardWriteError>;

/// Remote writes a completed drop may issue.
///
/// Each drop maps to exactly one of these calls; the coordinator never
/// mutates local card state, leaving correction to the live subscription.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardWriter: Send + Sync {
    /// Moves a card to the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardWriteError`] when the backend rejects the write.
    async fn set_status(&self, card: ProjectId, status: ProjectStatus) -> BoardWriteResult;

    /// Archives a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardWriteError`] when the backend rejects the write.
    async fn archive(&self, card: ProjectId) -> BoardWriteResult;

    /// Permanently deletes a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardWriteError`] when the backend rejects the write.
    async fn delete(&self, card: ProjectId) -> BoardWriteResult;
}

/// Board writer backed by a project repository.
#[derive(Clone)]
pub struct RepositoryBoardWriter<P>
where
    P: ProjectRepository,
{
    projects: Arc<P>,
}

impl<P> RepositoryBoardWriter<P>
where
    P: ProjectRepository,
{
    /// Creates a writer over the repository.
    #[must_use]
    pub const fn new(projects: Arc<P>) -> Self {
        Self { projects }
    }
}

fn rejected(err: &ProjectRepositoryError) -> BoardWriteError {
    BoardWriteError(err.to_string())
}

#[async_trait]
impl<P> BoardWriter for RepositoryBoardWriter<P>
where
    P: ProjectRepository,
{
    async fn set_status(&self, card: ProjectId, status: ProjectStatus) -> BoardWriteResult {
        self.projects
            .update_status(card, status)
            .await
            .map_err(|err| rejected(&err))
    }

    async fn archive(&self, card: ProjectId) -> BoardWriteResult {
        self.projects
            .set_archived(card, true)
            .await
            .map_err(|err| rejected(&err))
    }

    async fn delete(&self, card: ProjectId) -> BoardWriteResult {
        self.projects
            .delete(card)
            .await
            .map_err(|err| rejected(&err))
    }
}
