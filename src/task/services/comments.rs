//! Comment thread orchestration.

use crate::auth::domain::EmailAddress;
use crate::store::Subscription;
use crate::task::domain::{Comment, CommentDraft, Feedback, TaskDomainError, TaskId};
use crate::task::ports::{
    CommentObserver, CommentRepository, CommentRepositoryError, TaskRepository,
    TaskRepositoryError,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by comment operations.
#[derive(Debug, Error)]
pub enum CommentServiceError {
    /// Domain validation rejected the input.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The commented task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task repository failed.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),

    /// The comment repository failed.
    #[error(transparent)]
    Repository(#[from] CommentRepositoryError),
}

/// Request to append a comment to a task's thread.
#[derive(Debug, Clone)]
pub struct AddCommentRequest {
    task_id: TaskId,
    author_name: String,
    author_email: EmailAddress,
    text: String,
    feedback: Option<(u8, String)>,
}

impl AddCommentRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        author_name: impl Into<String>,
        author_email: EmailAddress,
        text: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            author_name: author_name.into(),
            author_email,
            text: text.into(),
            feedback: None,
        }
    }

    /// Attaches structured feedback; validated when the comment is added.
    #[must_use]
    pub fn with_feedback(mut self, difficulty: u8, improvement: impl Into<String>) -> Self {
        self.feedback = Some((difficulty, improvement.into()));
        self
    }
}

/// Comment orchestration over the comment and task repositories.
#[derive(Clone)]
pub struct CommentService<T, M, C>
where
    T: TaskRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    comments: Arc<M>,
    clock: Arc<C>,
}

impl<T, M, C> CommentService<T, M, C>
where
    T: TaskRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, comments: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            comments,
            clock,
        }
    }

    /// Appends a comment to the task's thread.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::TaskNotFound`] when the task does
    /// not exist and [`CommentServiceError::Domain`] for empty text or an
    /// out-of-range difficulty rating.
    pub async fn add(&self, request: AddCommentRequest) -> Result<Comment, CommentServiceError> {
        let feedback = request
            .feedback
            .map(|(difficulty, improvement)| Feedback::new(difficulty, improvement))
            .transpose()?;
        self.tasks
            .find_by_id(request.task_id)
            .await?
            .ok_or(CommentServiceError::TaskNotFound(request.task_id))?;

        let comment = Comment::create(
            CommentDraft {
                task_id: request.task_id,
                author_name: request.author_name,
                author_email: request.author_email,
                text: request.text,
                feedback,
            },
            self.clock.as_ref(),
        )?;
        self.comments.append(&comment).await?;
        Ok(comment)
    }

    /// Returns the task's thread in posting order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] when the store is
    /// inaccessible.
    pub async fn thread(&self, task: TaskId) -> Result<Vec<Comment>, CommentServiceError> {
        let comments = self.comments.list_by_task(task).await?;
        Ok(comments)
    }

    /// Subscribes to the task's thread.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Repository`] when the subscription
    /// cannot be established.
    pub fn watch_thread(
        &self,
        task: TaskId,
        observer: CommentObserver,
    ) -> Result<Subscription, CommentServiceError> {
        let subscription = self.comments.watch(task, observer)?;
        Ok(subscription)
    }
}
