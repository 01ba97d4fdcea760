//! Domain model for tasks and their comment threads.

mod comment;
mod error;
mod ids;
mod task;

pub use comment::{Comment, CommentDraft, Feedback, PersistedCommentData};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{CommentId, TaskId};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskStatus};

/// Priority is shared with the project domain; tasks reuse it unchanged.
pub use crate::project::domain::Priority;
