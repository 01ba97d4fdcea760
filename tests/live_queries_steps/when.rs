//! When steps for the live query teardown scenarios.

use super::world::{LiveQueryWorld, run_async};
use eyre::WrapErr;
use pegboard::auth::domain::EmailAddress;
use pegboard::project::services::CreateProjectRequest;
use rstest_bdd_macros::when;

#[when("the subscription is torn down")]
fn subscription_torn_down(world: &mut LiveQueryWorld) -> Result<(), eyre::Report> {
    let subscription = world
        .subscription
        .take()
        .ok_or_else(|| eyre::eyre!("missing subscription in scenario world"))?;
    subscription.unsubscribe();
    Ok(())
}

#[when(r#"a project "{title}" is created"#)]
fn project_created_after(world: &mut LiveQueryWorld, title: String) -> Result<(), eyre::Report> {
    let owner = EmailAddress::parse("ana@example.com")
        .map_err(|err| eyre::eyre!("invalid owner address in scenario: {err}"))?;
    run_async(world.service.create(CreateProjectRequest::new(title, owner)))
        .wrap_err("create project after teardown")?;
    Ok(())
}
