//! Confirmation-gated bulk actions over the archived list.

use super::helpers::{Backend, backend, seed_project};
use pegboard::project::domain::{Project, ProjectId};
use pegboard::project::ports::{FixedGate, ProjectFilter, ProjectRepository};
use pegboard::project::services::{ArchiveBulkService, BulkOutcome};
use pegboard::task::ports::TaskRepository;
use pegboard::task::services::CreateTaskRequest;
use rstest::rstest;
use std::sync::Arc;

async fn archive_two(backend: &Backend) -> (ProjectId, ProjectId) {
    let first = seed_project(backend, "Old campaign").await;
    let second = seed_project(backend, "Old website").await;
    for id in [first.id(), second.id()] {
        backend
            .project_service
            .archive(id)
            .await
            .expect("archive should succeed");
    }
    (first.id(), second.id())
}

async fn archived_ids(backend: &Backend) -> Vec<ProjectId> {
    backend
        .projects
        .list(&ProjectFilter::any().archived_only())
        .await
        .expect("list should succeed")
        .iter()
        .map(Project::id)
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_confirmed_unarchive_all_restores_every_project(backend: Backend) {
    let (first, second) = archive_two(&backend).await;
    let service = ArchiveBulkService::new(
        Arc::clone(&backend.projects),
        Arc::clone(&backend.tasks),
        Arc::new(FixedGate::accepting()),
    );

    let outcome = service
        .unarchive_all()
        .await
        .expect("bulk action should succeed");

    assert_eq!(outcome, BulkOutcome::Completed { affected: 2 });
    assert!(archived_ids(&backend).await.is_empty());
    let active: Vec<ProjectId> = backend
        .projects
        .list(&ProjectFilter::any().active())
        .await
        .expect("list should succeed")
        .iter()
        .map(Project::id)
        .collect();
    assert!(active.contains(&first) && active.contains(&second));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_declined_unarchive_all_changes_nothing(backend: Backend) {
    let (first, second) = archive_two(&backend).await;
    let service = ArchiveBulkService::new(
        Arc::clone(&backend.projects),
        Arc::clone(&backend.tasks),
        Arc::new(FixedGate::declining()),
    );

    let outcome = service
        .unarchive_all()
        .await
        .expect("bulk action should succeed");

    assert_eq!(outcome, BulkOutcome::Declined);
    let still_archived = archived_ids(&backend).await;
    assert!(still_archived.contains(&first) && still_archived.contains(&second));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_confirmed_delete_all_cascades_to_tasks(backend: Backend) {
    let (first, second) = archive_two(&backend).await;
    for id in [first, second] {
        backend
            .task_service
            .create(CreateTaskRequest::new(id, "Leftover task"))
            .await
            .expect("task creation should succeed");
    }
    let service = ArchiveBulkService::new(
        Arc::clone(&backend.projects),
        Arc::clone(&backend.tasks),
        Arc::new(FixedGate::accepting()),
    );

    let outcome = service
        .delete_all_archived()
        .await
        .expect("bulk action should succeed");

    assert_eq!(outcome, BulkOutcome::Completed { affected: 2 });
    assert!(archived_ids(&backend).await.is_empty());
    for id in [first, second] {
        let orphans = backend
            .tasks
            .list_by_project(id)
            .await
            .expect("list should succeed");
        assert!(orphans.is_empty(), "tasks follow their deleted project");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_declined_delete_all_keeps_projects_and_tasks(backend: Backend) {
    let (first, _) = archive_two(&backend).await;
    backend
        .task_service
        .create(CreateTaskRequest::new(first, "Leftover task"))
        .await
        .expect("task creation should succeed");
    let service = ArchiveBulkService::new(
        Arc::clone(&backend.projects),
        Arc::clone(&backend.tasks),
        Arc::new(FixedGate::declining()),
    );

    let outcome = service
        .delete_all_archived()
        .await
        .expect("bulk action should succeed");

    assert_eq!(outcome, BulkOutcome::Declined);
    assert_eq!(archived_ids(&backend).await.len(), 2);
    let tasks = backend
        .tasks
        .list_by_project(first)
        .await
        .expect("list should succeed");
    assert_eq!(tasks.len(), 1);
}
