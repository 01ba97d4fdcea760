//! Document mapping between raw store documents and project aggregates.
//!
//! This is the schema-on-read boundary: raw documents from the schema-less
//! store are validated and normalized here, with deterministic defaults
//! for absent optional fields and typed failures for malformed ones, so no
//! call site ever reads a raw field with an ad hoc fallback.

use crate::auth::domain::EmailAddress;
use crate::project::domain::{
    PersistedProjectData, Priority, Project, ProjectId, ProjectStatus,
};
use crate::store::{DecodeError, Document};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value, json};

/// Encodes a project into its raw document form.
#[must_use]
pub fn encode_project(project: &Project) -> Document {
    let mut body = Map::new();
    body.insert("title".to_owned(), json!(project.title()));
    body.insert("description".to_owned(), json!(project.description()));
    body.insert("status".to_owned(), json!(project.status().as_str()));
    body.insert("priority".to_owned(), json!(project.priority().as_str()));
    body.insert("owner".to_owned(), json!(project.owner().as_str()));
    body.insert("members".to_owned(), member_values(project.members()));
    body.insert(
        "created_at".to_owned(),
        json!(project.created_at().to_rfc3339()),
    );
    body.insert("start_date".to_owned(), date_value(project.start_date()));
    body.insert("end_date".to_owned(), date_value(project.end_date()));
    body.insert("archived".to_owned(), json!(project.archived()));
    Document::new(project.id().into_inner(), body)
}

/// Returns the editable fields of a project as a merge payload.
///
/// Status and the archived flag are deliberately excluded; they travel
/// through their own single-field updates.
#[must_use]
pub fn editable_fields(project: &Project) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("title".to_owned(), json!(project.title()));
    fields.insert("description".to_owned(), json!(project.description()));
    fields.insert("priority".to_owned(), json!(project.priority().as_str()));
    fields.insert("members".to_owned(), member_values(project.members()));
    fields.insert("start_date".to_owned(), date_value(project.start_date()));
    fields.insert("end_date".to_owned(), date_value(project.end_date()));
    fields
}

/// Decodes a raw document into a project aggregate.
///
/// # Errors
///
/// Returns [`DecodeError`] when a required field is absent or any present
/// field holds a malformed value.
pub fn decode_project(document: &Document) -> Result<Project, DecodeError> {
    let title = require_string(document, "title")?;
    if title.trim().is_empty() {
        return Err(DecodeError::invalid("title", "empty title"));
    }
    let owner = email_field(document, "owner")?
        .ok_or(DecodeError::MissingField("owner"))?;

    let description = optional_string(document, "description")?.unwrap_or_default();
    let status = match optional_string(document, "status")? {
        Some(raw) => ProjectStatus::try_from(raw.as_str())
            .map_err(|err| DecodeError::invalid("status", err.to_string()))?,
        None => ProjectStatus::ToDo,
    };
    let priority = match optional_string(document, "priority")? {
        Some(raw) => Priority::try_from(raw.as_str())
            .map_err(|err| DecodeError::invalid("priority", err.to_string()))?,
        None => Priority::Medium,
    };
    let members = member_list(document)?;
    let created_at = timestamp_field(document, "created_at")?;
    let start_date = date_field(document, "start_date")?;
    let end_date = date_field(document, "end_date")?;
    let archived = bool_field(document, "archived")?;

    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(document.id()),
        title,
        description,
        status,
        priority,
        owner,
        members,
        created_at,
        start_date,
        end_date,
        archived,
    }))
}

fn member_values(members: &[EmailAddress]) -> Value {
    Value::Array(
        members
            .iter()
            .map(|member| json!(member.as_str()))
            .collect(),
    )
}

fn date_value(date: Option<NaiveDate>) -> Value {
    date.map_or(Value::Null, |d| json!(d.format("%Y-%m-%d").to_string()))
}

fn optional_string(document: &Document, field: &'static str) -> Result<Option<String>, DecodeError> {
    match document.field(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(DecodeError::invalid(field, format!("expected string, got {other}"))),
    }
}

fn require_string(document: &Document, field: &'static str) -> Result<String, DecodeError> {
    optional_string(document, field)?.ok_or(DecodeError::MissingField(field))
}

fn email_field(document: &Document, field: &'static str) -> Result<Option<EmailAddress>, DecodeError> {
    optional_string(document, field)?
        .map(|raw| {
            EmailAddress::parse(&raw).map_err(|err| DecodeError::invalid(field, err.to_string()))
        })
        .transpose()
}

fn member_list(document: &Document) -> Result<Vec<EmailAddress>, DecodeError> {
    match document.field("members") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(raw) => EmailAddress::parse(raw)
                    .map_err(|err| DecodeError::invalid("members", err.to_string())),
                other => Err(DecodeError::invalid(
                    "members",
                    format!("expected string entry, got {other}"),
                )),
            })
            .collect(),
        Some(other) => Err(DecodeError::invalid(
            "members",
            format!("expected array, got {other}"),
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

fn date_field(document: &Document, field: &'static str) -> Result<Option<NaiveDate>, DecodeError> {
    optional_string(document, field)?
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|err| DecodeError::invalid(field, err.to_string()))
        })
        .transpose()
}

fn bool_field(document: &Document, field: &'static str) -> Result<bool, DecodeError> {
    match document.field(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(other) => Err(DecodeError::invalid(field, format!("expected bool, got {other}"))),
    }
}
