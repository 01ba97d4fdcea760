//! Shared world state for the live query teardown scenarios.

use mockable::DefaultClock;
use pegboard::project::adapters::memory::InMemoryProjectRepository;
use pegboard::project::services::ProjectLifecycleService;
use pegboard::store::Subscription;
use pegboard::task::adapters::memory::InMemoryTaskRepository;
use rstest::fixture;
use std::sync::{Arc, Mutex};

/// Project service type used by the scenarios.
pub type TestProjectService =
    ProjectLifecycleService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for live query behaviour tests.
pub struct LiveQueryWorld {
    pub projects: Arc<InMemoryProjectRepository>,
    pub service: TestProjectService,
    pub deliveries: Arc<Mutex<Vec<usize>>>,
    pub subscription: Option<Subscription>,
}

impl LiveQueryWorld {
    /// Creates a world with no subscription established yet.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let service = ProjectLifecycleService::new(
            Arc::clone(&projects),
            tasks,
            Arc::new(DefaultClock),
        );

        Self {
            projects,
            service,
            deliveries: Arc::new(Mutex::new(Vec::new())),
            subscription: None,
        }
    }
}

impl Default for LiveQueryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LiveQueryWorld {
    LiveQueryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
