//! Then steps for the archived projects scenarios.

use super::world::{ArchivedWorld, run_async};
use eyre::WrapErr;
use pegboard::board::ArchivedListView;
use pegboard::project::ports::{ProjectFilter, ProjectRepository};
use pegboard::project::services::BulkOutcome;
use rstest_bdd_macros::then;

fn archived_view(world: &ArchivedWorld) -> Result<ArchivedListView, eyre::Report> {
    let projects = run_async(world.projects.list(&ProjectFilter::any()))
        .wrap_err("list projects for the archived view")?;
    Ok(ArchivedListView::build(&projects))
}

#[then("the archived list renders two unarchive actions")]
fn two_unarchive_actions(world: &ArchivedWorld) -> Result<(), eyre::Report> {
    let view = archived_view(world)?;
    eyre::ensure!(
        view.rows().len() == 2,
        "expected two rows, found {}",
        view.rows().len()
    );
    Ok(())
}

#[then("the archived list renders one unarchive-all action")]
fn one_unarchive_all_action(world: &ArchivedWorld) -> Result<(), eyre::Report> {
    let view = archived_view(world)?;
    eyre::ensure!(view.offers_unarchive_all(), "bulk action not offered");
    Ok(())
}

#[then("the bulk action reports it was declined")]
fn outcome_declined(world: &ArchivedWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .ok_or_else(|| eyre::eyre!("missing bulk outcome"))?;
    eyre::ensure!(
        outcome == BulkOutcome::Declined,
        "expected a declined outcome, got {outcome:?}"
    );
    Ok(())
}

#[then("the bulk action reports {count:usize} affected projects")]
fn outcome_affected(world: &ArchivedWorld, count: usize) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .ok_or_else(|| eyre::eyre!("missing bulk outcome"))?;
    eyre::ensure!(
        outcome == BulkOutcome::Completed { affected: count },
        "expected {count} affected projects, got {outcome:?}"
    );
    Ok(())
}

#[then("both projects are still archived")]
fn both_still_archived(world: &ArchivedWorld) -> Result<(), eyre::Report> {
    let archived = run_async(world.projects.list(&ProjectFilter::any().archived_only()))
        .wrap_err("list archived projects")?;
    eyre::ensure!(
        archived.len() == 2,
        "expected both projects archived, found {}",
        archived.len()
    );
    Ok(())
}

#[then("the archived list is empty")]
fn archived_list_empty(world: &ArchivedWorld) -> Result<(), eyre::Report> {
    let view = archived_view(world)?;
    eyre::ensure!(view.rows().is_empty(), "archived rows remain");
    eyre::ensure!(!view.offers_unarchive_all(), "bulk action still offered");
    Ok(())
}
