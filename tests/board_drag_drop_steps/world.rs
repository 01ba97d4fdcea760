//! Shared world state for the board drag-drop scenarios.

use mockable::DefaultClock;
use pegboard::app::NoticeQueue;
use pegboard::board::{
    DragDropCoordinator, DragError, DropEffect, DropZone, RepositoryBoardWriter, ZoneGuard,
};
use pegboard::project::adapters::memory::InMemoryProjectRepository;
use pegboard::project::domain::{Project, ProjectId};
use pegboard::project::services::ProjectLifecycleService;
use pegboard::task::adapters::memory::InMemoryTaskRepository;
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Guard whose answer the scenario can flip at runtime.
pub struct ToggleGuard {
    enabled: Arc<AtomicBool>,
}

impl ZoneGuard for ToggleGuard {
    fn accepts(&self, _card: ProjectId, _zone: DropZone) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// Project service type used by the scenarios.
pub type TestProjectService =
    ProjectLifecycleService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Coordinator type used by the scenarios.
pub type TestCoordinator =
    DragDropCoordinator<RepositoryBoardWriter<InMemoryProjectRepository>, ToggleGuard>;

/// Scenario world for drag-drop behaviour tests.
pub struct DragDropWorld {
    pub projects: Arc<InMemoryProjectRepository>,
    pub service: TestProjectService,
    pub notices: NoticeQueue,
    pub coordinator: TestCoordinator,
    pub zones_enabled: Arc<AtomicBool>,
    pub card: Option<Project>,
    pub last_hover: Option<Result<(), DragError>>,
    pub last_drop: Option<Result<DropEffect, DragError>>,
}

impl DragDropWorld {
    /// Creates a world with enabled zones and no card in flight.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let service = ProjectLifecycleService::new(
            Arc::clone(&projects),
            tasks,
            Arc::new(DefaultClock),
        );
        let notices = NoticeQueue::new();
        let zones_enabled = Arc::new(AtomicBool::new(true));
        let guard = ToggleGuard {
            enabled: Arc::clone(&zones_enabled),
        };
        let writer = RepositoryBoardWriter::new(Arc::clone(&projects));
        let coordinator = DragDropCoordinator::new(Arc::new(writer), Arc::new(guard), notices.clone());

        Self {
            projects,
            service,
            notices,
            coordinator,
            zones_enabled,
            card: None,
            last_hover: None,
            last_drop: None,
        }
    }
}

impl Default for DragDropWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragDropWorld {
    DragDropWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
