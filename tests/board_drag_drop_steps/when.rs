//! When steps for the board drag-drop scenarios.

use super::world::{DragDropWorld, run_async};
use pegboard::board::DropZone;
use pegboard::project::domain::ProjectStatus;
use rstest_bdd_macros::when;

#[when(r#"the card is dragged onto the "{status}" column and dropped"#)]
fn drag_to_column_and_drop(
    world: &mut DragDropWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let target = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid target column in scenario: {err}"))?;
    let card = world
        .card
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?
        .id();

    world
        .coordinator
        .begin_drag(card)
        .map_err(|err| eyre::eyre!("drag should start: {err}"))?;
    world
        .coordinator
        .hover_enter(DropZone::Column(target))
        .map_err(|err| eyre::eyre!("hover should register: {err}"))?;
    world.last_drop = Some(run_async(world.coordinator.drop_card()));
    Ok(())
}

#[when("the card is dragged towards the trash zone")]
fn drag_towards_trash(world: &mut DragDropWorld) -> Result<(), eyre::Report> {
    let card = world
        .card
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?
        .id();

    world
        .coordinator
        .begin_drag(card)
        .map_err(|err| eyre::eyre!("drag should start: {err}"))?;
    world.last_hover = Some(world.coordinator.hover_enter(DropZone::Trash));
    Ok(())
}
