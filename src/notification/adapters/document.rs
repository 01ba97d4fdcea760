//! Document mapping between raw store documents and notifications.

use crate::auth::domain::EmailAddress;
use crate::notification::domain::{
    Notification, NotificationId, PersistedNotificationData,
};
use crate::project::domain::ProjectId;
use crate::store::{DecodeError, Document};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

/// Encodes a notification into its raw document form.
#[must_use]
pub fn encode_notification(notification: &Notification) -> Document {
    let mut body = Map::new();
    body.insert(
        "project_id".to_owned(),
        json!(notification.project_id().to_string()),
    );
    body.insert(
        "recipient".to_owned(),
        json!(notification.recipient().as_str()),
    );
    body.insert("message".to_owned(), json!(notification.message()));
    body.insert("read".to_owned(), json!(notification.read()));
    body.insert(
        "created_at".to_owned(),
        json!(notification.created_at().to_rfc3339()),
    );
    Document::new(notification.id().into_inner(), body)
}

/// Decodes a raw document into a notification.
///
/// # Errors
///
/// Returns [`DecodeError`] when a required field is absent or any present
/// field holds a malformed value.
pub fn decode_notification(document: &Document) -> Result<Notification, DecodeError> {
    let project_id = uuid_field(document, "project_id")?;
    let recipient = email_field(document, "recipient")?;
    let message = require_string(document, "message")?;
    let read = bool_field(document, "read")?;
    let created_at = timestamp_field(document, "created_at")?;

    Ok(Notification::from_persisted(PersistedNotificationData {
        id: NotificationId::from_uuid(document.id()),
        project_id: ProjectId::from_uuid(project_id),
        recipient,
        message,
        read,
        created_at,
    }))
}

fn optional_string(
    document: &Document,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match document.field(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(DecodeError::invalid(
            field,
            format!("expected string, got {other}"),
        )),
    }
}

fn require_string(document: &Document, field: &'static str) -> Result<String, DecodeError> {
    optional_string(document, field)?.ok_or(DecodeError::MissingField(field))
}

fn uuid_field(document: &Document, field: &'static str) -> Result<uuid::Uuid, DecodeError> {
    let raw = require_string(document, field)?;
    uuid::Uuid::parse_str(&raw).map_err(|err| DecodeError::invalid(field, err.to_string()))
}

fn email_field(document: &Document, field: &'static str) -> Result<EmailAddress, DecodeError> {
    let raw = require_string(document, field)?;
    EmailAddress::parse(&raw).map_err(|err| DecodeError::invalid(field, err.to_string()))
}

fn bool_field(document: &Document, field: &'static str) -> Result<bool, DecodeError> {
    match document.field(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(other) => Err(DecodeError::invalid(
            field,
            format!("expected bool, got {other}"),
        )),
    }
}

fn timestamp_field(document: &Document, field: &'static str) -> Result<DateTime<Utc>, DecodeError> {
    match optional_string(document, field)? {
        None => Ok(DateTime::UNIX_EPOCH),
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| DecodeError::invalid(field, err.to_string())),
    }
}
