//! Repository port for append-only comment threads.

use crate::store::Subscription;
use crate::task::domain::{Comment, CommentId, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type CommentRepositoryResult<T> = Result<T, CommentRepositoryError>;

/// Callback invoked with a task's full comment thread, oldest first.
pub type CommentObserver = Arc<dyn Fn(&[Comment]) + Send + Sync>;

/// Comment persistence contract.
///
/// The thread is append-only: there is no update or single-comment delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Appends a comment to its task's thread.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::DuplicateComment`] when the
    /// identifier already exists.
    async fn append(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Removes every comment under the task and returns how many went.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the store is
    /// inaccessible.
    async fn delete_by_task(&self, task: TaskId) -> CommentRepositoryResult<usize>;

    /// Returns the task's comments in posting order, oldest first.
    async fn list_by_task(&self, task: TaskId) -> CommentRepositoryResult<Vec<Comment>>;

    /// Establishes a live query over the task's comment thread.
    ///
    /// The observer receives the full thread immediately and after every
    /// append, oldest first, until the handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the store is
    /// inaccessible.
    fn watch(
        &self,
        task: TaskId,
        observer: CommentObserver,
    ) -> CommentRepositoryResult<Subscription>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
