//! In-memory notification repository over a schema-less collection.

use crate::auth::domain::EmailAddress;
use crate::notification::adapters::document::{decode_notification, encode_notification};
use crate::notification::domain::{Notification, NotificationId};
use crate::notification::ports::{
    NotificationObserver, NotificationRepository, NotificationRepositoryError,
    NotificationRepositoryResult,
};
use crate::store::{Document, MemoryCollection, Query, SortDirection, StoreError, Subscription};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Thread-safe in-memory notification repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    collection: MemoryCollection,
}

impl InMemoryNotificationRepository {
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

/// Query for one recipient's notifications, newest first.
fn recipient_query(recipient: &EmailAddress) -> Query {
    let wanted = recipient.as_str().to_owned();
    Query::all()
        .with_filter(move |document| {
            document.field("recipient").and_then(Value::as_str) == Some(wanted.as_str())
        })
        .order_by("created_at", SortDirection::Descending)
}

fn map_create_error(err: StoreError, id: NotificationId) -> NotificationRepositoryError {
    match err {
        StoreError::DuplicateDocument(_) => {
            NotificationRepositoryError::DuplicateNotification(id)
        }
        other => NotificationRepositoryError::persistence(other),
    }
}

fn map_update_error(err: StoreError, id: NotificationId) -> NotificationRepositoryError {
    match err {
        StoreError::NotFound(_) => NotificationRepositoryError::NotFound(id),
        other => NotificationRepositoryError::persistence(other),
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn create(&self, notification: &Notification) -> NotificationRepositoryResult<()> {
        self.collection
            .insert(encode_notification(notification))
            .map_err(|err| map_create_error(err, notification.id()))
    }

    async fn mark_read(&self, id: NotificationId) -> NotificationRepositoryResult<()> {
        let mut fields = Map::new();
        fields.insert("read".to_owned(), json!(true));
        self.collection
            .merge_fields(id.into_inner(), fields)
            .map_err(|err| map_update_error(err, id))
    }

    async fn delete(&self, id: NotificationId) -> NotificationRepositoryResult<()> {
        self.collection
            .remove(id.into_inner())
            .map_err(|err| map_update_error(err, id))
    }

    async fn list_for_recipient(
        &self,
        recipient: &EmailAddress,
    ) -> NotificationRepositoryResult<Vec<Notification>> {
        let documents = self
            .collection
            .query(&recipient_query(recipient))
            .map_err(NotificationRepositoryError::persistence)?;
        Ok(decode_all(&documents))
    }

    fn watch(
        &self,
        recipient: EmailAddress,
        observer: NotificationObserver,
    ) -> NotificationRepositoryResult<Subscription> {
        let raw_observer: crate::store::Observer = Arc::new(move |documents: &[Document]| {
            let notifications = decode_all(documents);
            observer(&notifications);
        });
        self.collection
            .watch(recipient_query(&recipient), raw_observer)
            .map_err(NotificationRepositoryError::persistence)
    }
}

/// Decodes every document, dropping the ones that fail.
fn decode_all(documents: &[Document]) -> Vec<Notification> {
    documents
        .iter()
        .filter_map(|document| decode_notification(document).ok())
        .collect()
}
