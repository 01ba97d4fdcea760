//! In-memory project repository over a schema-less document collection.

use crate::auth::domain::EmailAddress;
use crate::project::adapters::document::{decode_project, editable_fields, encode_project};
use crate::project::domain::{Priority, Project, ProjectId, ProjectStatus};
use crate::project::ports::{
    ProjectFilter, ProjectObserver, ProjectRepository, ProjectRepositoryError,
    ProjectRepositoryResult,
};
use crate::store::{Document, MemoryCollection, Query, SortDirection, StoreError, Subscription};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Thread-safe in-memory project repository.
///
/// Stores raw documents exactly as the remote collection would and decodes
/// them at this boundary; documents that fail to decode are omitted from
/// list results and live snapshots rather than poisoning the whole set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    collection: MemoryCollection,
}

impl InMemoryProjectRepository {
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
fn raw_query(filter: &ProjectFilter) -> Query {
    let archived = filter.archived;
    let member = filter.member.clone();
    Query::all()
        .with_filter(move |document| {
            archived_matches(document, archived) && member_matches(document, member.as_ref())
        })
        .order_by("created_at", SortDirection::Descending)
}

fn archived_matches(document: &Document, wanted: Option<bool>) -> bool {
    wanted.is_none_or(|want| {
        document
            .field("archived")
            .and_then(Value::as_bool)
            .unwrap_or(false)
            == want
    })
}

fn member_matches(document: &Document, member: Option<&EmailAddress>) -> bool {
    member.is_none_or(|email| {
        let as_value = json!(email.as_str());
        let owned = document.field("owner") == Some(&as_value);
        let listed = document
            .field("members")
            .and_then(Value::as_array)
            .is_some_and(|members| members.contains(&as_value));
        owned || listed
    })
}

fn archived_raw_query() -> Query {
    Query::all().with_filter(|document| {
        document
            .field("archived")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    })
}

fn map_create_error(err: StoreError, id: ProjectId) -> ProjectRepositoryError {
    match err {
        StoreError::DuplicateDocument(_) => ProjectRepositoryError::DuplicateProject(id),
        other => ProjectRepositoryError::persistence(other),
    }
}

fn map_update_error(err: StoreError, id: ProjectId) -> ProjectRepositoryError {
    match err {
        StoreError::NotFound(_) => ProjectRepositoryError::NotFound(id),
        other => ProjectRepositoryError::persistence(other),
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> ProjectRepositoryResult<()> {
        self.collection
            .insert(encode_project(project))
            .map_err(|err| map_create_error(err, project.id()))
    }

    async fn update_details(&self, project: &Project) -> ProjectRepositoryResult<()> {
        self.collection
            .merge_fields(project.id().into_inner(), editable_fields(project))
            .map_err(|err| map_update_error(err, project.id()))
    }

    async fn update_status(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> ProjectRepositoryResult<()> {
        let mut fields = Map::new();
        fields.insert("status".to_owned(), json!(status.as_str()));
        self.collection
            .merge_fields(id.into_inner(), fields)
            .map_err(|err| map_update_error(err, id))
    }

    async fn update_priority(
        &self,
        id: ProjectId,
        priority: Priority,
    ) -> ProjectRepositoryResult<()> {
        let mut fields = Map::new();
        fields.insert("priority".to_owned(), json!(priority.as_str()));
        self.collection
            .merge_fields(id.into_inner(), fields)
            .map_err(|err| map_update_error(err, id))
    }

    async fn set_archived(&self, id: ProjectId, archived: bool) -> ProjectRepositoryResult<()> {
        let mut fields = Map::new();
        fields.insert("archived".to_owned(), json!(archived));
        self.collection
            .merge_fields(id.into_inner(), fields)
            .map_err(|err| map_update_error(err, id))
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.collection
            .remove(id.into_inner())
            .map_err(|err| map_update_error(err, id))
    }

    async fn unarchive_all(&self) -> ProjectRepositoryResult<usize> {
        let mut fields = Map::new();
        fields.insert("archived".to_owned(), json!(false));
        self.collection
            .merge_matching(&archived_raw_query(), &fields)
            .map_err(ProjectRepositoryError::persistence)
    }

    async fn delete_archived(&self) -> ProjectRepositoryResult<Vec<ProjectId>> {
        let archived = self
            .collection
            .query(&archived_raw_query())
            .map_err(ProjectRepositoryError::persistence)?;
        let ids: Vec<ProjectId> = archived
            .iter()
            .map(|document| ProjectId::from_uuid(document.id()))
            .collect();
        self.collection
            .remove_matching(&archived_raw_query())
            .map_err(ProjectRepositoryError::persistence)?;
        Ok(ids)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let document = self
            .collection
            .get(id.into_inner())
            .map_err(ProjectRepositoryError::persistence)?;
        document
            .as_ref()
            .map(|doc| {
                decode_project(doc).map_err(|err| ProjectRepositoryError::MalformedDocument {
                    id,
                    reason: err.to_string(),
                })
            })
            .transpose()
    }

    async fn list(&self, filter: &ProjectFilter) -> ProjectRepositoryResult<Vec<Project>> {
        let documents = self
            .collection
            .query(&raw_query(filter))
            .map_err(ProjectRepositoryError::persistence)?;
        Ok(decode_all(&documents))
    }

    fn watch(
        &self,
        filter: ProjectFilter,
        observer: ProjectObserver,
    ) -> ProjectRepositoryResult<Subscription> {
        let raw_observer: crate::store::Observer = Arc::new(move |documents: &[Document]| {
            let projects = decode_all(documents);
            observer(&projects);
        });
        self.collection
            .watch(raw_query(&filter), raw_observer)
            .map_err(ProjectRepositoryError::persistence)
    }
}

/// Decodes every document, dropping the ones that fail.
fn decode_all(documents: &[Document]) -> Vec<Project> {
    documents
        .iter()
        .filter_map(|document| decode_project(document).ok())
        .collect()
}
