//! Given steps for the live query teardown scenarios.

use super::world::{LiveQueryWorld, run_async};
use eyre::WrapErr;
use pegboard::auth::domain::EmailAddress;
use pegboard::project::domain::Project;
use pegboard::project::ports::{ProjectFilter, ProjectObserver, ProjectRepository};
use pegboard::project::services::CreateProjectRequest;
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given("a live query over all projects")]
fn live_query(world: &mut LiveQueryWorld) -> Result<(), eyre::Report> {
    let sink = Arc::clone(&world.deliveries);
    let observer: ProjectObserver = Arc::new(move |projects: &[Project]| {
        if let Ok(mut all) = sink.lock() {
            all.push(projects.len());
        }
    });

    let subscription = world
        .projects
        .watch(ProjectFilter::any(), observer)
        .map_err(|err| eyre::eyre!("watch should succeed: {err}"))?;
    world.subscription = Some(subscription);
    Ok(())
}

#[given(r#"a project "{title}" is created"#)]
fn project_created(world: &mut LiveQueryWorld, title: String) -> Result<(), eyre::Report> {
    let owner = EmailAddress::parse("ana@example.com")
        .map_err(|err| eyre::eyre!("invalid owner address in scenario: {err}"))?;
    run_async(world.service.create(CreateProjectRequest::new(title, owner)))
        .wrap_err("create project for live query scenario")?;
    Ok(())
}
