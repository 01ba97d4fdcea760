//! Repository port for notification persistence and live queries.

use crate::auth::domain::EmailAddress;
use crate::notification::domain::{Notification, NotificationId};
use crate::store::Subscription;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification repository operations.
pub type NotificationRepositoryResult<T> = Result<T, NotificationRepositoryError>;

/// Callback invoked with a recipient's full notification list.
pub type NotificationObserver = Arc<dyn Fn(&[Notification]) + Send + Sync>;

/// Notification persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Stores a new notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::DuplicateNotification`] when
    /// the identifier already exists.
    async fn create(&self, notification: &Notification) -> NotificationRepositoryResult<()>;

    /// Marks a notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::NotFound`] when the
    /// notification does not exist.
    async fn mark_read(&self, id: NotificationId) -> NotificationRepositoryResult<()>;

    /// Removes a notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::NotFound`] when the
    /// notification does not exist.
    async fn delete(&self, id: NotificationId) -> NotificationRepositoryResult<()>;

    /// Returns the recipient's notifications, newest first.
    async fn list_for_recipient(
        &self,
        recipient: &EmailAddress,
    ) -> NotificationRepositoryResult<Vec<Notification>>;

    /// Establishes a live query over the recipient's notifications.
    ///
    /// The observer receives the full current list immediately and after
    /// every change, newest first, until the handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::Persistence`] when the store
    /// is inaccessible.
    fn watch(
        &self,
        recipient: EmailAddress,
        observer: NotificationObserver,
    ) -> NotificationRepositoryResult<Subscription>;
}

/// Errors returned by notification repository implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationRepositoryError {
    /// A notification with the same identifier already exists.
    #[error("duplicate notification identifier: {0}")]
    DuplicateNotification(NotificationId),

    /// The notification was not found.
    #[error("notification not found: {0}")]
    NotFound(NotificationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
