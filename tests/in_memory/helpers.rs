//! Shared fixtures for the in-memory integration tests.

use mockable::DefaultClock;
use pegboard::auth::domain::EmailAddress;
use pegboard::project::adapters::memory::InMemoryProjectRepository;
use pegboard::project::domain::Project;
use pegboard::project::services::{CreateProjectRequest, ProjectLifecycleService};
use pegboard::task::adapters::memory::{InMemoryCommentRepository, InMemoryTaskRepository};
use pegboard::task::services::TaskLifecycleService;
use rstest::fixture;
use std::sync::Arc;

/// Project service wired to the in-memory adapters.
pub type TestProjectService =
    ProjectLifecycleService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Task service wired to the in-memory adapters.
pub type TestTaskService = TaskLifecycleService<
    InMemoryProjectRepository,
    InMemoryTaskRepository,
    InMemoryCommentRepository,
    DefaultClock,
>;

/// Every repository and service a flow test might touch.
pub struct Backend {
    pub projects: Arc<InMemoryProjectRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub project_service: TestProjectService,
    pub task_service: TestTaskService,
}

/// Provides a fresh backend for each test.
#[fixture]
pub fn backend() -> Backend {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let comments = Arc::new(InMemoryCommentRepository::new());
    let project_service = ProjectLifecycleService::new(
        Arc::clone(&projects),
        Arc::clone(&tasks),
        Arc::new(DefaultClock),
    );
    let task_service = TaskLifecycleService::new(
        Arc::clone(&projects),
        Arc::clone(&tasks),
        Arc::clone(&comments),
        Arc::new(DefaultClock),
    );
    Backend {
        projects,
        tasks,
        comments,
        project_service,
        task_service,
    }
}

/// Parses an address that the test knows is well formed.
pub fn email(raw: &str) -> EmailAddress {
    EmailAddress::parse(raw).expect("valid address")
}

/// Creates a project owned by `ana@example.com` with the given title.
pub async fn seed_project(backend: &Backend, title: &str) -> Project {
    backend
        .project_service
        .create(CreateProjectRequest::new(title, email("ana@example.com")))
        .await
        .expect("project creation should succeed")
}
