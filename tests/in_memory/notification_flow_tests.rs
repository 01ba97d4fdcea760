//! Notification fan-out for membership and comment events.

use super::helpers::{Backend, backend, email, seed_project};
use mockable::DefaultClock;
use pegboard::notification::adapters::memory::InMemoryNotificationRepository;
use pegboard::notification::domain::Notification;
use pegboard::notification::ports::NotificationRepository;
use pegboard::notification::services::NotificationDispatcher;
use pegboard::project::services::EditProjectRequest;
use pegboard::task::services::{AddCommentRequest, CreateTaskRequest};
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestDispatcher = NotificationDispatcher<InMemoryNotificationRepository, DefaultClock>;

struct Inbox {
    dispatcher: TestDispatcher,
    notifications: Arc<InMemoryNotificationRepository>,
}

#[fixture]
fn inbox() -> Inbox {
    let notifications = Arc::new(InMemoryNotificationRepository::new());
    let dispatcher =
        NotificationDispatcher::new(Arc::clone(&notifications), Arc::new(DefaultClock));
    Inbox {
        dispatcher,
        notifications,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adding_a_member_lands_a_notification_in_their_inbox(backend: Backend, inbox: Inbox) {
    let project = seed_project(&backend, "Website relaunch").await;

    let edited = backend
        .project_service
        .edit(
            project.id(),
            EditProjectRequest::new().with_members(vec![
                email("ana@example.com"),
                email("bo@example.com"),
            ]),
        )
        .await
        .expect("edit should succeed");
    assert_eq!(edited.added_members, vec![email("bo@example.com")]);

    inbox
        .dispatcher
        .member_added(&edited.project, &edited.added_members, "Ana")
        .await
        .expect("dispatch should succeed");

    let delivered = inbox
        .notifications
        .list_for_recipient(&email("bo@example.com"))
        .await
        .expect("list should succeed");
    assert_eq!(delivered.len(), 1);
    assert_eq!(
        delivered.first().map(Notification::message),
        Some("Ana added you to the project \"Website relaunch\"")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_comment_notifies_every_member_except_the_author(backend: Backend, inbox: Inbox) {
    let project = seed_project(&backend, "Website relaunch").await;
    let edited = backend
        .project_service
        .edit(
            project.id(),
            EditProjectRequest::new().with_members(vec![
                email("ana@example.com"),
                email("bo@example.com"),
                email("chris@example.com"),
            ]),
        )
        .await
        .expect("edit should succeed");
    let task = backend
        .task_service
        .create(CreateTaskRequest::new(project.id(), "Draft landing page"))
        .await
        .expect("task creation should succeed");

    let comment_service = pegboard::task::services::CommentService::new(
        Arc::clone(&backend.tasks),
        Arc::clone(&backend.comments),
        Arc::new(DefaultClock),
    );
    let comment = comment_service
        .add(AddCommentRequest::new(
            task.id(),
            "Bo",
            email("bo@example.com"),
            "First pass done",
        ))
        .await
        .expect("comment should be added");

    let created = inbox
        .dispatcher
        .comment_added(&edited.project, task.title(), &comment)
        .await
        .expect("dispatch should succeed");

    assert_eq!(created.len(), 2);
    let author_inbox = inbox
        .notifications
        .list_for_recipient(&email("bo@example.com"))
        .await
        .expect("list should succeed");
    assert!(author_inbox.is_empty(), "the author is not notified");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_recipient_can_mark_a_notification_read(backend: Backend, inbox: Inbox) {
    let project = seed_project(&backend, "Website relaunch").await;
    let created = inbox
        .dispatcher
        .member_added(&project, &[email("bo@example.com")], "Ana")
        .await
        .expect("dispatch should succeed");
    let delivered = created.first().expect("notification present");

    inbox
        .notifications
        .mark_read(delivered.id())
        .await
        .expect("mark should succeed");

    let refreshed = inbox
        .notifications
        .list_for_recipient(&email("bo@example.com"))
        .await
        .expect("list should succeed");
    assert!(refreshed.first().is_some_and(Notification::read));
}
