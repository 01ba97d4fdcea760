//! Given steps for the archived projects scenarios.

use super::world::{ArchivedWorld, run_async};
use eyre::WrapErr;
use pegboard::auth::domain::EmailAddress;
use pegboard::project::services::CreateProjectRequest;
use rstest_bdd_macros::given;

#[given("two archived projects")]
fn two_archived_projects(world: &mut ArchivedWorld) -> Result<(), eyre::Report> {
    let owner = EmailAddress::parse("ana@example.com")
        .map_err(|err| eyre::eyre!("invalid owner address in scenario: {err}"))?;

    for title in ["Old campaign", "Old website"] {
        let project = run_async(
            world
                .service
                .create(CreateProjectRequest::new(title, owner.clone())),
        )
        .wrap_err("create project for archive scenario")?;
        run_async(world.service.archive(project.id()))
            .wrap_err("archive project for scenario")?;
        world.archived_ids.push(project.id());
    }
    Ok(())
}

#[given("the unarchive-all confirmation will be declined")]
fn confirmation_declined(world: &mut ArchivedWorld) {
    world.confirmation_accepted = false;
}

#[given("the unarchive-all confirmation will be accepted")]
fn confirmation_accepted(world: &mut ArchivedWorld) {
    world.confirmation_accepted = true;
}
