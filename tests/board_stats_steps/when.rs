//! When steps for the dashboard statistics scenarios.

use super::world::StatsWorld;
use pegboard::board::aggregate;
use rstest_bdd_macros::when;

#[when("the statistics are computed")]
fn compute_statistics(world: &mut StatsWorld) {
    world.stats = Some(aggregate(&world.tasks, world.today));
}
