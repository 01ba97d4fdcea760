//! Then steps for the dashboard statistics scenarios.

use super::world::StatsWorld;
use rstest_bdd_macros::then;

#[then("the totals are {total:usize} tasks, {completed:usize} completed, {overdue:usize} overdue, and {high:usize} high priority")]
fn totals_are(
    world: &StatsWorld,
    total: usize,
    completed: usize,
    overdue: usize,
    high: usize,
) -> Result<(), eyre::Report> {
    let stats = world
        .stats
        .ok_or_else(|| eyre::eyre!("missing computed statistics"))?;

    eyre::ensure!(stats.total == total, "total was {}", stats.total);
    eyre::ensure!(
        stats.completed == completed,
        "completed was {}",
        stats.completed
    );
    eyre::ensure!(stats.overdue == overdue, "overdue was {}", stats.overdue);
    eyre::ensure!(
        stats.high_priority == high,
        "high priority was {}",
        stats.high_priority
    );
    Ok(())
}

#[then("the progress is {percent:u8} percent")]
fn progress_is(world: &StatsWorld, percent: u8) -> Result<(), eyre::Report> {
    let stats = world
        .stats
        .ok_or_else(|| eyre::eyre!("missing computed statistics"))?;
    eyre::ensure!(
        stats.progress == percent,
        "progress was {}",
        stats.progress
    );
    Ok(())
}
