//! Then steps for the live query teardown scenarios.

use super::world::LiveQueryWorld;
use rstest_bdd_macros::then;

#[then("the query delivered snapshots of sizes 0 and 1 only")]
fn deliveries_stopped(world: &LiveQueryWorld) -> Result<(), eyre::Report> {
    let seen = world
        .deliveries
        .lock()
        .map_err(|_| eyre::eyre!("delivery log lock poisoned"))?
        .clone();

    eyre::ensure!(
        seen == vec![0, 1],
        "expected deliveries [0, 1], got {seen:?}"
    );
    Ok(())
}
