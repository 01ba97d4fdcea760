//! In-memory task repository over a schema-less document collection.

use crate::project::domain::ProjectId;
use crate::store::{Document, MemoryCollection, Query, SortDirection, StoreError, Subscription};
use crate::task::adapters::document::{decode_task, editable_task_fields, encode_task};
use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::task::ports::{
    TaskFilter, TaskObserver, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Thread-safe in-memory task repository.
///
/// Documents that fail to decode are omitted from list results and live
/// snapshots rather than poisoning the whole set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    collection: MemoryCollection,
}

impl InMemoryTaskRepository {
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

/// Translates a typed filter into a raw-document query, newest first.
fn raw_query(filter: &TaskFilter) -> Query {
    let project = filter.project;
    let status = filter.status;
    Query::all()
        .with_filter(move |document| {
            project_matches(document, project) && status_matches(document, status)
        })
        .order_by("created_at", SortDirection::Descending)
}

fn project_matches(document: &Document, wanted: Option<ProjectId>) -> bool {
    wanted.is_none_or(|project| {
        document.field("project_id").and_then(Value::as_str)
            == Some(project.to_string().as_str())
    })
}

fn status_matches(document: &Document, wanted: Option<TaskStatus>) -> bool {
    wanted.is_none_or(|status| {
        document
            .field("status")
            .and_then(Value::as_str)
            .unwrap_or(TaskStatus::Pending.as_str())
            == status.as_str()
    })
}

fn projects_raw_query(projects: &[ProjectId]) -> Query {
    let wanted: Vec<String> = projects.iter().map(ToString::to_string).collect();
    Query::all().with_filter(move |document| {
        document
            .field("project_id")
            .and_then(Value::as_str)
            .is_some_and(|raw| wanted.iter().any(|id| id == raw))
    })
}

fn map_create_error(err: StoreError, id: TaskId) -> TaskRepositoryError {
    match err {
        StoreError::DuplicateDocument(_) => TaskRepositoryError::DuplicateTask(id),
        other => TaskRepositoryError::persistence(other),
    }
}

fn map_update_error(err: StoreError, id: TaskId) -> TaskRepositoryError {
    match err {
        StoreError::NotFound(_) => TaskRepositoryError::NotFound(id),
        other => TaskRepositoryError::persistence(other),
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.collection
            .insert(encode_task(task))
            .map_err(|err| map_create_error(err, task.id()))
    }

    async fn update_details(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.collection
            .merge_fields(task.id().into_inner(), editable_task_fields(task))
            .map_err(|err| map_update_error(err, task.id()))
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> TaskRepositoryResult<()> {
        let mut fields = Map::new();
        fields.insert("status".to_owned(), json!(status.as_str()));
        fields.insert(
            "completed_at".to_owned(),
            completed_at.map_or(Value::Null, |at| json!(at.to_rfc3339())),
        );
        self.collection
            .merge_fields(id.into_inner(), fields)
            .map_err(|err| map_update_error(err, id))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.collection
            .remove(id.into_inner())
            .map_err(|err| map_update_error(err, id))
    }

    async fn delete_by_project(&self, project: ProjectId) -> TaskRepositoryResult<usize> {
        self.collection
            .remove_matching(&projects_raw_query(&[project]))
            .map_err(TaskRepositoryError::persistence)
    }

    async fn delete_by_projects(&self, projects: &[ProjectId]) -> TaskRepositoryResult<usize> {
        if projects.is_empty() {
            return Ok(0);
        }
        self.collection
            .remove_matching(&projects_raw_query(projects))
            .map_err(TaskRepositoryError::persistence)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let document = self
            .collection
            .get(id.into_inner())
            .map_err(TaskRepositoryError::persistence)?;
        document
            .as_ref()
            .map(|doc| {
                decode_task(doc).map_err(|err| TaskRepositoryError::MalformedDocument {
                    id,
                    reason: err.to_string(),
                })
            })
            .transpose()
    }

    async fn list_by_project(&self, project: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let filter = TaskFilter::any().for_project(project);
        let documents = self
            .collection
            .query(&raw_query(&filter))
            .map_err(TaskRepositoryError::persistence)?;
        Ok(decode_all(&documents))
    }

    fn watch(
        &self,
        filter: TaskFilter,
        observer: TaskObserver,
    ) -> TaskRepositoryResult<Subscription> {
        let raw_observer: crate::store::Observer = Arc::new(move |documents: &[Document]| {
            let tasks = decode_all(documents);
            observer(&tasks);
        });
        self.collection
            .watch(raw_query(&filter), raw_observer)
            .map_err(TaskRepositoryError::persistence)
    }
}

/// Decodes every document, dropping the ones that fail.
fn decode_all(documents: &[Document]) -> Vec<Task> {
    documents
        .iter()
        .filter_map(|document| decode_task(document).ok())
        .collect()
}
