//! Domain model for projects.

mod error;
mod ids;
mod project;

pub use error::{ParsePriorityError, ParseProjectStatusError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::{PersistedProjectData, Priority, Project, ProjectDraft, ProjectStatus};

use crate::auth::domain::EmailAddress;

/// Returns the members present in `current` but not in `previous`.
///
/// Live queries always deliver the full member list, never a patch, so
/// consumers that react to membership changes (notification dispatch) diff
/// consecutive snapshots with this helper.
#[must_use]
pub fn newly_added_members(
    previous: &[EmailAddress],
    current: &[EmailAddress],
) -> Vec<EmailAddress> {
    current
        .iter()
        .filter(|member| !previous.contains(member))
        .cloned()
        .collect()
}
