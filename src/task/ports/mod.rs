//! Port contracts for task and comment persistence.

pub mod comments;
pub mod repository;

pub use comments::{
    CommentObserver, CommentRepository, CommentRepositoryError, CommentRepositoryResult,
};
pub use repository::{
    TaskFilter, TaskObserver, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
