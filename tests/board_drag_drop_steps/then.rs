//! Then steps for the board drag-drop scenarios.

use super::world::{DragDropWorld, run_async};
use pegboard::app::NoticeLevel;
use pegboard::board::{DragError, DropEffect};
use pegboard::project::domain::ProjectStatus;
use pegboard::project::ports::ProjectRepository;
use rstest_bdd_macros::then;

#[then(r#"the drop reports the card moved to "{status}""#)]
fn drop_reports_move(world: &DragDropWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected column in scenario: {err}"))?;
    let result = world
        .last_drop
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;

    if *result != Ok(DropEffect::Moved(expected)) {
        return Err(eyre::eyre!("expected a move to {status}, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the project is stored with status "{status}""#)]
fn project_stored_with_status(world: &DragDropWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let card = world
        .card
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;

    let stored = run_async(world.projects.find_by_id(card.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("project missing from the store"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("the hover is refused")]
fn hover_refused(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_hover
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing hover result"))?;

    if *result != Err(DragError::ZoneRejected) {
        return Err(eyre::eyre!("expected a rejected hover, got {result:?}"));
    }
    Ok(())
}

#[then("dropping anyway issues no remote update")]
fn drop_issues_nothing(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    let result = run_async(world.coordinator.drop_card());

    if result != Err(DragError::NotOverZone) {
        return Err(eyre::eyre!("expected the drop to be refused, got {result:?}"));
    }
    Ok(())
}

#[then("the drop reports a rejected write")]
fn drop_reports_rejection(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_drop
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;

    if *result != Ok(DropEffect::WriteRejected) {
        return Err(eyre::eyre!("expected a rejected write, got {result:?}"));
    }
    Ok(())
}

#[then("an error notice is queued")]
fn error_notice_queued(world: &DragDropWorld) -> Result<(), eyre::Report> {
    let drained = world.notices.drain();
    let levels: Vec<NoticeLevel> = drained.iter().map(pegboard::app::Notice::level).collect();

    if levels != vec![NoticeLevel::Error] {
        return Err(eyre::eyre!("expected one error notice, got {levels:?}"));
    }
    Ok(())
}
