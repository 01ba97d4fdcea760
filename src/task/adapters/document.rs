//! Document mapping between raw store documents and task-side aggregates.
//!
//! Like the project mapping, this is a schema-on-read boundary: absent
//! optional fields fall back to deterministic defaults, present but
//! malformed fields fail with a typed decode error.

use crate::auth::domain::EmailAddress;
use crate::project::domain::{Priority, ProjectId};
use crate::store::{DecodeError, Document};
use crate::task::domain::{
    Comment, CommentId, Feedback, PersistedCommentData, PersistedTaskData, Task, TaskId,
    TaskStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value, json};

/// Encodes a task into its raw document form.
#[must_use]
pub fn encode_task(task: &Task) -> Document {
    let mut body = Map::new();
    body.insert(
        "project_id".to_owned(),
        json!(task.project_id().to_string()),
    );
    body.insert("title".to_owned(), json!(task.title()));
    body.insert("description".to_owned(), json!(task.description()));
    body.insert(
        "notes".to_owned(),
        task.notes().map_or(Value::Null, |notes| json!(notes)),
    );
    body.insert("status".to_owned(), json!(task.status().as_str()));
    body.insert("due_date".to_owned(), date_value(task.due_date()));
    body.insert(
        "completed_at".to_owned(),
        task.completed_at()
            .map_or(Value::Null, |at| json!(at.to_rfc3339())),
    );
    body.insert("assignees".to_owned(), email_values(task.assignees()));
    body.insert("priority".to_owned(), json!(task.priority().as_str()));
    body.insert("created_at".to_owned(), json!(task.created_at().to_rfc3339()));
    Document::new(task.id().into_inner(), body)
}

/// Returns the editable fields of a task as a merge payload.
///
/// Status and the completion timestamp are deliberately excluded; they
/// travel together through the status update.
#[must_use]
pub fn editable_task_fields(task: &Task) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("title".to_owned(), json!(task.title()));
    fields.insert("description".to_owned(), json!(task.description()));
    fields.insert(
        "notes".to_owned(),
        task.notes().map_or(Value::Null, |notes| json!(notes)),
    );
    fields.insert("due_date".to_owned(), date_value(task.due_date()));
    fields.insert("assignees".to_owned(), email_values(task.assignees()));
    fields.insert("priority".to_owned(), json!(task.priority().as_str()));
    fields
}

/// Decodes a raw document into a task aggregate.
///
/// # Errors
///
/// Returns [`DecodeError`] when a required field is absent or any present
/// field holds a malformed value.
pub fn decode_task(document: &Document) -> Result<Task, DecodeError> {
    let title = require_string(document, "title")?;
    if title.trim().is_empty() {
        return Err(DecodeError::invalid("title", "empty title"));
    }
    let project_id = uuid_field(document, "project_id")?;

    let description = optional_string(document, "description")?.unwrap_or_default();
    let notes = optional_string(document, "notes")?;
    let status = match optional_string(document, "status")? {
        Some(raw) => TaskStatus::try_from(raw.as_str())
            .map_err(|err| DecodeError::invalid("status", err.to_string()))?,
        None => TaskStatus::Pending,
    };
    let priority = match optional_string(document, "priority")? {
        Some(raw) => Priority::try_from(raw.as_str())
            .map_err(|err| DecodeError::invalid("priority", err.to_string()))?,
        None => Priority::Medium,
    };
    let due_date = date_field(document, "due_date")?;
    let completed_at = optional_timestamp_field(document, "completed_at")?;
    let assignees = email_list(document, "assignees")?;
    let created_at = timestamp_field(document, "created_at")?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(document.id()),
        project_id: ProjectId::from_uuid(project_id),
        title,
        description,
        notes,
        status,
        due_date,
        completed_at,
        assignees,
        priority,
        created_at,
    }))
}

/// Encodes a comment into its raw document form.
#[must_use]
pub fn encode_comment(comment: &Comment) -> Document {
    let mut body = Map::new();
    body.insert("task_id".to_owned(), json!(comment.task_id().to_string()));
    body.insert("author_name".to_owned(), json!(comment.author_name()));
    body.insert(
        "author_email".to_owned(),
        json!(comment.author_email().as_str()),
    );
    body.insert("text".to_owned(), json!(comment.text()));
    body.insert(
        "created_at".to_owned(),
        json!(comment.created_at().to_rfc3339()),
    );
    body.insert(
        "feedback".to_owned(),
        comment.feedback().map_or(Value::Null, |feedback| {
            json!({
                "difficulty": feedback.difficulty(),
                "improvement": feedback.improvement(),
            })
        }),
    );
    Document::new(comment.id().into_inner(), body)
}

/// Decodes a raw document into a comment.
///
/// # Errors
///
/// Returns [`DecodeError`] when a required field is absent or any present
/// field holds a malformed value.
pub fn decode_comment(document: &Document) -> Result<Comment, DecodeError> {
    let task_id = uuid_field(document, "task_id")?;
    let author_name = optional_string(document, "author_name")?.unwrap_or_default();
    let author_email = email_field(document, "author_email")?
        .ok_or(DecodeError::MissingField("author_email"))?;
    let text = require_string(document, "text")?;
    if text.trim().is_empty() {
        return Err(DecodeError::invalid("text", "empty comment text"));
    }
    let created_at = timestamp_field(document, "created_at")?;
    let feedback = feedback_field(document)?;

    Ok(Comment::from_persisted(PersistedCommentData {
        id: CommentId::from_uuid(document.id()),
        task_id: TaskId::from_uuid(task_id),
        author_name,
        author_email,
        text,
        created_at,
        feedback,
    }))
}

fn email_values(addresses: &[EmailAddress]) -> Value {
    Value::Array(
        addresses
            .iter()
            .map(|address| json!(address.as_str()))
            .collect(),
    )
}

fn date_value(date: Option<NaiveDate>) -> Value {
    date.map_or(Value::Null, |d| json!(d.format("%Y-%m-%d").to_string()))
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

fn email_field(
    document: &Document,
    field: &'static str,
) -> Result<Option<EmailAddress>, DecodeError> {
    optional_string(document, field)?
        .map(|raw| {
            EmailAddress::parse(&raw).map_err(|err| DecodeError::invalid(field, err.to_string()))
        })
        .transpose()
}

fn email_list(document: &Document, field: &'static str) -> Result<Vec<EmailAddress>, DecodeError> {
    match document.field(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(raw) => EmailAddress::parse(raw)
                    .map_err(|err| DecodeError::invalid(field, err.to_string())),
                other => Err(DecodeError::invalid(
                    field,
                    format!("expected string entry, got {other}"),
                )),
            })
            .collect(),
        Some(other) => Err(DecodeError::invalid(
            field,
            format!("expected array, got {other}"),
        )),
    }
}

fn timestamp_field(document: &Document, field: &'static str) -> Result<DateTime<Utc>, DecodeError> {
    match optional_string(document, field)? {
        None => Ok(DateTime::UNIX_EPOCH),
        Some(raw) => parse_timestamp(&raw, field),
    }
}

fn optional_timestamp_field(
    document: &Document,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    optional_string(document, field)?
        .map(|raw| parse_timestamp(&raw, field))
        .transpose()
}

fn parse_timestamp(raw: &str, field: &'static str) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| DecodeError::invalid(field, err.to_string()))
}

fn date_field(document: &Document, field: &'static str) -> Result<Option<NaiveDate>, DecodeError> {
    optional_string(document, field)?
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|err| DecodeError::invalid(field, err.to_string()))
        })
        .transpose()
}

fn feedback_field(document: &Document) -> Result<Option<Feedback>, DecodeError> {
    match document.field("feedback") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(entries)) => {
            let raw_difficulty = entries
                .get("difficulty")
                .and_then(Value::as_u64)
                .ok_or(DecodeError::invalid(
                    "feedback",
                    "missing or non-numeric difficulty",
                ))?;
            let difficulty = u8::try_from(raw_difficulty)
                .map_err(|err| DecodeError::invalid("feedback", err.to_string()))?;
            let improvement = entries
                .get("improvement")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Feedback::new(difficulty, improvement)
                .map(Some)
                .map_err(|err| DecodeError::invalid("feedback", err.to_string()))
        }
        Some(other) => Err(DecodeError::invalid(
            "feedback",
            format!("expected object, got {other}"),
        )),
    }
}
