//! Live-query teardown semantics.

use super::helpers::{Backend, backend, seed_project};
use pegboard::board::EntityStore;
use pegboard::project::domain::Project;
use pegboard::project::ports::{ProjectFilter, ProjectObserver, ProjectRepository};
use rstest::rstest;
use std::sync::{Arc, Mutex};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unsubscribing_stops_future_deliveries(backend: Backend) {
    let deliveries: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&deliveries);
    let observer: ProjectObserver = Arc::new(move |projects: &[Project]| {
        if let Ok(mut all) = sink.lock() {
            all.push(projects.len());
        }
    });

    let subscription = backend
        .projects
        .watch(ProjectFilter::any(), observer)
        .expect("watch should succeed");
    seed_project(&backend, "Seen").await;
    subscription.unsubscribe();
    seed_project(&backend, "Unseen").await;

    let seen = deliveries.lock().expect("lock").clone();
    assert_eq!(seen, vec![0, 1], "nothing arrives after teardown");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_a_mirror_cancels_its_subscription(backend: Backend) {
    let mirror: EntityStore<Project> =
        EntityStore::attach(|observer| backend.projects.watch(ProjectFilter::any(), observer))
            .expect("watch should succeed");
    seed_project(&backend, "First").await;
    assert_eq!(mirror.snapshot().len(), 1);
    drop(mirror);

    // A fresh mirror still sees changes, so the store itself is healthy.
    let replacement: EntityStore<Project> =
        EntityStore::attach(|observer| backend.projects.watch(ProjectFilter::any(), observer))
            .expect("watch should succeed");
    seed_project(&backend, "Second").await;
    assert_eq!(replacement.snapshot().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detaching_a_mirror_freezes_its_snapshot(backend: Backend) {
    let mut mirror: EntityStore<Project> =
        EntityStore::attach(|observer| backend.projects.watch(ProjectFilter::any(), observer))
            .expect("watch should succeed");
    seed_project(&backend, "Before detach").await;
    mirror.detach();
    seed_project(&backend, "After detach").await;

    assert_eq!(mirror.snapshot().len(), 1);
    assert!(!mirror.is_attached());
}
