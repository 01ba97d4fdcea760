//! Notification record addressed to one recipient.

use crate::auth::domain::EmailAddress;
use crate::project::domain::ProjectId;
use crate::store::Identified;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a notification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new random notification identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a notification identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input for creating a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    /// Project the notification refers to.
    pub project_id: ProjectId,
    /// Addressed recipient.
    pub recipient: EmailAddress,
    /// Rendered message text.
    pub message: String,
}

/// Parameter object for reconstructing a persisted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedNotificationData {
    /// Persisted identifier.
    pub id: NotificationId,
    /// Persisted project reference.
    pub project_id: ProjectId,
    /// Persisted recipient address.
    pub recipient: EmailAddress,
    /// Persisted message text.
    pub message: String,
    /// Persisted read flag.
    pub read: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A message addressed to one recipient about one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    project_id: ProjectId,
    recipient: EmailAddress,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification.
    #[must_use]
    pub fn create(draft: NotificationDraft, clock: &impl Clock) -> Self {
        Self {
            id: NotificationId::new(),
            project_id: draft.project_id,
            recipient: draft.recipient,
            message: draft.message,
            read: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a notification from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedNotificationData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            recipient: data.recipient,
            message: data.message,
            read: data.read,
            created_at: data.created_at,
        }
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the project reference.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }

    /// Returns the rendered message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the read flag.
    #[must_use]
    pub const fn read(&self) -> bool {
        self.read
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Identified for Notification {
    fn ident(&self) -> Uuid {
        self.id.into_inner()
    }
}
