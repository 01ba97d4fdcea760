//! View model for the archived projects screen.

use crate::project::domain::{Project, ProjectId};

/// One archived project row with its restore action target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedRow {
    id: ProjectId,
    title: String,
}

impl ArchivedRow {
    /// Returns the project the row's unarchive action targets.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the title shown on the row.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The archived list: one restore action per row plus a single
/// unarchive-all action whenever anything is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchivedListView {
    rows: Vec<ArchivedRow>,
}

impl ArchivedListView {
    /// Builds the view from a project list, keeping only archived entries
    /// in their input order.
    #[must_use]
    pub fn build(projects: &[Project]) -> Self {
        let rows = projects
            .iter()
            .filter(|project| project.archived())
            .map(|project| ArchivedRow {
                id: project.id(),
                title: project.title().to_owned(),
            })
            .collect();
        Self { rows }
    }

    /// Returns one row per archived project.
    #[must_use]
    pub fn rows(&self) -> &[ArchivedRow] {
        &self.rows
    }

    /// Whether the single unarchive-all action is offered.
    #[must_use]
    pub fn offers_unarchive_all(&self) -> bool {
        !self.rows.is_empty()
    }
}
