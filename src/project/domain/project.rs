//! Project aggregate root and its status/priority enumerations.

use super::{ParsePriorityError, ParseProjectStatusError, ProjectDomainError, ProjectId};
use crate::auth::domain::EmailAddress;
use crate::store::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project board status.
///
/// Projects and tasks keep separate canonical enumerations, as the source
/// data does; [`crate::task::domain::TaskStatus::as_project_status`] is the
/// only sanctioned mapping between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work has not started.
    ToDo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to_do" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Priority level shared by projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Routine work.
    Low,
    /// Default level.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Validated input for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Project title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Initial priority.
    pub priority: Priority,
    /// Owning user's email address.
    pub owner: EmailAddress,
    /// Initial member list; the owner is always included.
    pub members: Vec<EmailAddress>,
    /// Optional schedule start.
    pub start_date: Option<NaiveDate>,
    /// Optional schedule end.
    pub end_date: Option<NaiveDate>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted board status.
    pub status: ProjectStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted owner address.
    pub owner: EmailAddress,
    /// Persisted member list.
    pub members: Vec<EmailAddress>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted schedule start.
    pub start_date: Option<NaiveDate>,
    /// Persisted schedule end.
    pub end_date: Option<NaiveDate>,
    /// Persisted archived flag.
    pub archived: bool,
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    status: ProjectStatus,
    priority: Priority,
    owner: EmailAddress,
    members: Vec<EmailAddress>,
    created_at: DateTime<Utc>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    archived: bool,
}

impl Project {
    /// Creates a new project in the to-do column.
    ///
    /// The owner is always a member; duplicate member entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTitle`] when the title trims to
    /// nothing and [`ProjectDomainError::ScheduleEndsBeforeStart`] when
    /// both schedule dates are set out of order.
    pub fn create(draft: ProjectDraft, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        let title = validate_title(&draft.title)?;
        validate_schedule(draft.start_date, draft.end_date)?;
        let members = normalize_members(draft.members, &draft.owner);
        Ok(Self {
            id: ProjectId::new(),
            title,
            description: draft.description,
            status: ProjectStatus::ToDo,
            priority: draft.priority,
            owner: draft.owner,
            members,
            created_at: clock.utc(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            archived: false,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let members = normalize_members(data.members, &data.owner);
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            owner: data.owner,
            members,
            created_at: data.created_at,
            start_date: data.start_date,
            end_date: data.end_date,
            archived: data.archived,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the board status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the owner address.
    #[must_use]
    pub const fn owner(&self) -> &EmailAddress {
        &self.owner
    }

    /// Returns the member list, owner included, in normalized order.
    #[must_use]
    pub fn members(&self) -> &[EmailAddress] {
        &self.members
    }

    /// Returns whether the address is the owner or a member.
    #[must_use]
    pub fn has_member(&self, email: &EmailAddress) -> bool {
        self.members.contains(email)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the schedule start.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the schedule end.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the archived flag.
    #[must_use]
    pub const fn archived(&self) -> bool {
        self.archived
    }

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTitle`] when the new title trims
    /// to nothing.
    pub fn rename(&mut self, title: &str) -> Result<(), ProjectDomainError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Moves the project to another board column.
    pub const fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    /// Changes the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Sets or clears the archived flag.
    pub const fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
    }

    /// Replaces the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ScheduleEndsBeforeStart`] when both
    /// dates are set out of order.
    pub fn set_schedule(
        &mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<(), ProjectDomainError> {
        validate_schedule(start_date, end_date)?;
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    /// Replaces the member list; the owner is always retained.
    pub fn set_members(&mut self, members: Vec<EmailAddress>) {
        self.members = normalize_members(members, &self.owner);
    }

    /// Adds a member, ignoring duplicates.
    pub fn add_member(&mut self, member: EmailAddress) {
        if !self.members.contains(&member) {
            self.members.push(member);
            self.members.sort();
        }
    }

    /// Removes a member; the owner cannot be removed.
    pub fn remove_member(&mut self, member: &EmailAddress) {
        if member != &self.owner {
            self.members.retain(|existing| existing != member);
        }
    }
}

impl Identified for Project {
    fn ident(&self) -> Uuid {
        self.id.into_inner()
    }
}

fn validate_title(title: &str) -> Result<String, ProjectDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

fn validate_schedule(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), ProjectDomainError> {
    if let (Some(start), Some(end)) = (start_date, end_date)
        && end < start
    {
        return Err(ProjectDomainError::ScheduleEndsBeforeStart { start, end });
    }
    Ok(())
}

/// Dedupes and sorts the member list, forcing the owner in.
fn normalize_members(mut members: Vec<EmailAddress>, owner: &EmailAddress) -> Vec<EmailAddress> {
    if !members.contains(owner) {
        members.push(owner.clone());
    }
    members.sort();
    members.dedup();
    members
}
