//! Behaviour tests for the archived projects list and its bulk actions.

#[path = "archived_projects_steps/mod.rs"]
mod archived_projects_steps_defs;

use archived_projects_steps_defs::world::{ArchivedWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/archived_projects.feature",
    name = "Two archived projects offer two restore actions and one bulk action"
)]
#[tokio::test(flavor = "multi_thread")]
async fn archived_list_actions(world: ArchivedWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/archived_projects.feature",
    name = "Declining the unarchive-all confirmation changes nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn declined_confirmation_changes_nothing(world: ArchivedWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/archived_projects.feature",
    name = "Accepting the unarchive-all confirmation restores both projects"
)]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_confirmation_restores_projects(world: ArchivedWorld) {
    let _ = world;
}
