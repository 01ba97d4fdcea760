//! In-memory comment repository over a schema-less document collection.

use crate::store::{Document, MemoryCollection, Query, SortDirection, StoreError, Subscription};
use crate::task::adapters::document::{decode_comment, encode_comment};
use crate::task::domain::{Comment, CommentId, TaskId};
use crate::task::ports::{
    CommentObserver, CommentRepository, CommentRepositoryError, CommentRepositoryResult,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    collection: MemoryCollection,
}

impl InMemoryCommentRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing collection, e.g. one pre-seeded with raw
    /// documents.
    #[must_use]
    pub const fn with_collection(collection: MemoryCollection) -> Self {
        Self { collection }
    }
}

/// Query for one task's thread in posting order, oldest first.
fn thread_query(task: TaskId) -> Query {
    Query::all()
        .with_filter(move |document| {
            document.field("task_id").and_then(Value::as_str)
                == Some(task.to_string().as_str())
        })
        .order_by("created_at", SortDirection::Ascending)
}

fn map_append_error(err: StoreError, id: CommentId) -> CommentRepositoryError {
    match err {
        StoreError::DuplicateDocument(_) => CommentRepositoryError::DuplicateComment(id),
        other => CommentRepositoryError::persistence(other),
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn append(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        self.collection
            .insert(encode_comment(comment))
            .map_err(|err| map_append_error(err, comment.id()))
    }

    async fn delete_by_task(&self, task: TaskId) -> CommentRepositoryResult<usize> {
        self.collection
            .remove_matching(&thread_query(task))
            .map_err(CommentRepositoryError::persistence)
    }

    async fn list_by_task(&self, task: TaskId) -> CommentRepositoryResult<Vec<Comment>> {
        let documents = self
            .collection
            .query(&thread_query(task))
            .map_err(CommentRepositoryError::persistence)?;
        Ok(decode_all(&documents))
    }

    fn watch(
        &self,
        task: TaskId,
        observer: CommentObserver,
    ) -> CommentRepositoryResult<Subscription> {
        let raw_observer: crate::store::Observer = Arc::new(move |documents: &[Document]| {
            let comments = decode_all(documents);
            observer(&comments);
        });
        self.collection
            .watch(thread_query(task), raw_observer)
            .map_err(CommentRepositoryError::persistence)
    }
}

/// Decodes every document, dropping the ones that fail.
fn decode_all(documents: &[Document]) -> Vec<Comment> {
    documents
        .iter()
        .filter_map(|document| decode_comment(document).ok())
        .collect()
}
