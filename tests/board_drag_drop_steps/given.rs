//! Given steps for the board drag-drop scenarios.

use super::world::{DragDropWorld, run_async};
use eyre::WrapErr;
use pegboard::auth::domain::EmailAddress;
use pegboard::project::ports::ProjectRepository;
use pegboard::project::services::CreateProjectRequest;
use rstest_bdd_macros::given;
use std::sync::atomic::Ordering;

#[given(r#"a project "{title}" on the board"#)]
fn project_on_board(world: &mut DragDropWorld, title: String) -> Result<(), eyre::Report> {
    let owner = EmailAddress::parse("ana@example.com")
        .map_err(|err| eyre::eyre!("invalid owner address in scenario: {err}"))?;
    let project = run_async(world.service.create(CreateProjectRequest::new(title, owner)))
        .wrap_err("create project for drag-drop scenario")?;
    world.card = Some(project);
    Ok(())
}

#[given("every drop zone is disabled")]
fn zones_disabled(world: &mut DragDropWorld) {
    world.zones_enabled.store(false, Ordering::SeqCst);
}

#[given("the project vanishes from the backend")]
fn project_vanishes(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    let card = world
        .card
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    run_async(world.projects.delete(card.id())).wrap_err("delete project behind the board")?;
    Ok(())
}
