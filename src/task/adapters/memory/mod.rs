//! In-memory adapters backed by schema-less document collections.

mod comment;
mod task;

pub use comment::InMemoryCommentRepository;
pub use task::InMemoryTaskRepository;
