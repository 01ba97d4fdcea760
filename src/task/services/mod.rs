//! Orchestration services for task lifecycle and comment threads.

mod comments;
mod lifecycle;

pub use comments::{AddCommentRequest, CommentService, CommentServiceError};
pub use lifecycle::{CreateTaskRequest, EditTaskRequest, TaskLifecycleService, TaskServiceError};
