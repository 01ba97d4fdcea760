//! Orchestration services for project lifecycle and archive bulk actions.

mod bulk;
mod lifecycle;

pub use bulk::{ArchiveBulkService, BulkOutcome};
pub use lifecycle::{
    CreateProjectRequest, EditProjectRequest, EditedProject, ProjectLifecycleService,
    ProjectServiceError,
};
