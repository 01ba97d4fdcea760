//! When steps for the archived projects scenarios.

use super::world::{ArchivedWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("unarchive-all is requested")]
fn unarchive_all_requested(world: &mut ArchivedWorld) -> Result<(), eyre::Report> {
    let outcome = run_async(world.bulk_service().unarchive_all())
        .wrap_err("run the unarchive-all bulk action")?;
    world.last_outcome = Some(outcome);
    Ok(())
}
