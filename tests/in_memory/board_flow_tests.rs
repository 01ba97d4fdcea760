//! End-to-end drag-drop flows over live-mirrored projects.

use super::helpers::{Backend, backend, email, seed_project};
use pegboard::app::{NoticeLevel, NoticeQueue};
use pegboard::board::{
    DragDropCoordinator, DropEffect, DropZone, EntityStore, PermissiveGuard,
    RepositoryBoardWriter, aggregate, project_columns,
};
use pegboard::project::adapters::memory::InMemoryProjectRepository;
use pegboard::project::domain::{Priority, Project, ProjectStatus};
use pegboard::project::ports::{ProjectFilter, ProjectRepository};
use pegboard::task::domain::TaskStatus;
use pegboard::task::ports::TaskRepository;
use pegboard::task::services::CreateTaskRequest;
use rstest::rstest;
use std::sync::Arc;

type TestCoordinator =
    DragDropCoordinator<RepositoryBoardWriter<InMemoryProjectRepository>, PermissiveGuard>;

fn coordinator(backend: &Backend, notices: NoticeQueue) -> TestCoordinator {
    let writer = RepositoryBoardWriter::new(Arc::clone(&backend.projects));
    DragDropCoordinator::new(Arc::new(writer), Arc::new(PermissiveGuard), notices)
}

fn active_mirror(backend: &Backend) -> EntityStore<Project> {
    EntityStore::attach(|observer| backend.projects.watch(ProjectFilter::any().active(), observer))
        .expect("watch should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_column_drop_moves_the_card_and_the_mirror_follows(backend: Backend) {
    let project = seed_project(&backend, "Website relaunch").await;
    let mirror = active_mirror(&backend);
    let mut coordinator = coordinator(&backend, NoticeQueue::new());

    coordinator
        .begin_drag(project.id())
        .expect("drag should start");
    coordinator
        .hover_enter(DropZone::Column(ProjectStatus::Done))
        .expect("hover should register");
    let effect = coordinator.drop_card().await.expect("drop should succeed");

    assert_eq!(effect, DropEffect::Moved(ProjectStatus::Done));
    let snapshot = mirror.snapshot();
    assert_eq!(
        snapshot.first().map(Project::status),
        Some(ProjectStatus::Done)
    );

    let columns = project_columns(&snapshot);
    let done = columns
        .iter()
        .find(|column| column.status == ProjectStatus::Done)
        .expect("done column present");
    assert_eq!(done.projects.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_archive_drop_removes_the_card_from_the_active_mirror(backend: Backend) {
    let keeper = seed_project(&backend, "Keep me").await;
    let archived = seed_project(&backend, "Archive me").await;
    let mirror = active_mirror(&backend);
    let mut coordinator = coordinator(&backend, NoticeQueue::new());

    coordinator
        .begin_drag(archived.id())
        .expect("drag should start");
    coordinator
        .hover_enter(DropZone::Archive)
        .expect("hover should register");
    let effect = coordinator.drop_card().await.expect("drop should succeed");

    assert_eq!(effect, DropEffect::Archived);
    let remaining: Vec<_> = mirror
        .snapshot()
        .iter()
        .map(Project::id)
        .collect();
    assert_eq!(remaining, vec![keeper.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_trash_drop_deletes_the_record(backend: Backend) {
    let project = seed_project(&backend, "Throwaway").await;
    let mut coordinator = coordinator(&backend, NoticeQueue::new());

    coordinator
        .begin_drag(project.id())
        .expect("drag should start");
    coordinator
        .hover_enter(DropZone::Trash)
        .expect("hover should register");
    let effect = coordinator.drop_card().await.expect("drop should succeed");

    assert_eq!(effect, DropEffect::Deleted);
    let found = backend
        .projects
        .find_by_id(project.id())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_rejected_write_leaves_the_mirror_alone_and_raises_a_notice(backend: Backend) {
    let project = seed_project(&backend, "Vanishing").await;
    let mirror = active_mirror(&backend);
    let notices = NoticeQueue::new();
    let mut coordinator = coordinator(&backend, notices.clone());

    coordinator
        .begin_drag(project.id())
        .expect("drag should start");
    coordinator
        .hover_enter(DropZone::Column(ProjectStatus::Done))
        .expect("hover should register");
    // Another client deletes the record while the card is mid-drag.
    backend
        .projects
        .delete(project.id())
        .await
        .expect("delete should succeed");
    let before = mirror.snapshot();

    let effect = coordinator.drop_card().await.expect("drop is handled");

    assert_eq!(effect, DropEffect::WriteRejected);
    assert_eq!(mirror.snapshot(), before, "no local correction is applied");
    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(
        drained.first().map(pegboard::app::Notice::level),
        Some(NoticeLevel::Error)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_stats_follow_task_status_changes(backend: Backend) {
    let project = seed_project(&backend, "Sprint board").await;
    let owner = email("ana@example.com");

    for index in 0..4 {
        backend
            .task_service
            .create(
                CreateTaskRequest::new(project.id(), format!("Task {index}"))
                    .with_priority(Priority::High)
                    .with_assignees(vec![owner.clone()]),
            )
            .await
            .expect("task creation should succeed");
    }
    let tasks = backend
        .tasks
        .list_by_project(project.id())
        .await
        .expect("list should succeed");
    let first = tasks.first().expect("task present");
    backend
        .task_service
        .change_status(first.id(), TaskStatus::Completed)
        .await
        .expect("status change should succeed");

    let refreshed = backend
        .tasks
        .list_by_project(project.id())
        .await
        .expect("list should succeed");
    let stats = aggregate(&refreshed, chrono::Utc::now().date_naive());

    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.progress, 25);
    assert_eq!(stats.high_priority, 4);
}
