//! Append-only comments with optional structured feedback.

use super::{CommentId, TaskDomainError, TaskId};
use crate::auth::domain::EmailAddress;
use crate::store::Identified;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured feedback attached to a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    difficulty: u8,
    improvement: String,
}

impl Feedback {
    /// Creates validated feedback.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDifficulty`] when the rating is
    /// outside 1..=5.
    pub fn new(difficulty: u8, improvement: impl Into<String>) -> Result<Self, TaskDomainError> {
        if !(1..=5).contains(&difficulty) {
            return Err(TaskDomainError::InvalidDifficulty(difficulty));
        }
        Ok(Self {
            difficulty,
            improvement: improvement.into(),
        })
    }

    /// Returns the difficulty rating (1..=5).
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Returns the free-text improvement notes.
    #[must_use]
    pub fn improvement(&self) -> &str {
        &self.improvement
    }
}

/// Validated input for appending a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    /// Commented task.
    pub task_id: TaskId,
    /// Author display name.
    pub author_name: String,
    /// Author email address.
    pub author_email: EmailAddress,
    /// Comment text.
    pub text: String,
    /// Optional structured feedback.
    pub feedback: Option<Feedback>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Persisted task reference.
    pub task_id: TaskId,
    /// Persisted author display name.
    pub author_name: String,
    /// Persisted author email address.
    pub author_email: EmailAddress,
    /// Persisted comment text.
    pub text: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted structured feedback.
    pub feedback: Option<Feedback>,
}

/// Append-only comment on a task.
///
/// Comments carry no mutators: there is no edit or delete in the product,
/// so the type does not offer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_name: String,
    author_email: EmailAddress,
    text: String,
    created_at: DateTime<Utc>,
    feedback: Option<Feedback>,
}

impl Comment {
    /// Creates a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentText`] when the text trims
    /// to nothing.
    pub fn create(draft: CommentDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let text = draft.text.trim().to_owned();
        if text.is_empty() {
            return Err(TaskDomainError::EmptyCommentText);
        }
        Ok(Self {
            id: CommentId::new(),
            task_id: draft.task_id,
            author_name: draft.author_name,
            author_email: draft.author_email,
            text,
            created_at: clock.utc(),
            feedback: draft.feedback,
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            author_name: data.author_name,
            author_email: data.author_email,
            text: data.text,
            created_at: data.created_at,
            feedback: data.feedback,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the commented task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author display name.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns the author email address.
    #[must_use]
    pub const fn author_email(&self) -> &EmailAddress {
        &self.author_email
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the structured feedback, if any.
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}

impl Identified for Comment {
    fn ident(&self) -> Uuid {
        self.id.into_inner()
    }
}
