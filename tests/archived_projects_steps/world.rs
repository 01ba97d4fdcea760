//! Shared world state for the archived projects scenarios.

use mockable::DefaultClock;
use pegboard::project::adapters::memory::InMemoryProjectRepository;
use pegboard::project::domain::ProjectId;
use pegboard::project::ports::FixedGate;
use pegboard::project::services::{ArchiveBulkService, BulkOutcome, ProjectLifecycleService};
use pegboard::task::adapters::memory::InMemoryTaskRepository;
use rstest::fixture;
use std::sync::Arc;

/// Project service type used by the scenarios.
pub type TestProjectService =
    ProjectLifecycleService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Bulk service type used by the scenarios.
pub type TestBulkService =
    ArchiveBulkService<InMemoryProjectRepository, InMemoryTaskRepository, FixedGate>;

/// Scenario world for archived-list behaviour tests.
pub struct ArchivedWorld {
    pub projects: Arc<InMemoryProjectRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub service: TestProjectService,
    pub archived_ids: Vec<ProjectId>,
    pub confirmation_accepted: bool,
    pub last_outcome: Option<BulkOutcome>,
}

impl ArchivedWorld {
    /// Creates a world with empty repositories and a declining prompt.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let service = ProjectLifecycleService::new(
            Arc::clone(&projects),
            Arc::clone(&tasks),
            Arc::new(DefaultClock),
        );

        Self {
            projects,
            tasks,
            service,
            archived_ids: Vec::new(),
            confirmation_accepted: false,
            last_outcome: None,
        }
    }

    /// Builds the bulk service with the configured confirmation answer.
    #[must_use]
    pub fn bulk_service(&self) -> TestBulkService {
        let gate = if self.confirmation_accepted {
            FixedGate::accepting()
        } else {
            FixedGate::declining()
        };
        ArchiveBulkService::new(
            Arc::clone(&self.projects),
            Arc::clone(&self.tasks),
            Arc::new(gate),
        )
    }
}

impl Default for ArchivedWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ArchivedWorld {
    ArchivedWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
