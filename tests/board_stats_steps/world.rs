//! Shared world state for the dashboard statistics scenarios.

use chrono::NaiveDate;
use pegboard::board::BoardStats;
use pegboard::task::domain::Task;
use rstest::fixture;

/// Scenario world for aggregation behaviour tests.
pub struct StatsWorld {
    pub tasks: Vec<Task>,
    pub today: NaiveDate,
    pub stats: Option<BoardStats>,
}

impl StatsWorld {
    /// Creates a world with an empty board on a fixed date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default(),
            stats: None,
        }
    }
}

impl Default for StatsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatsWorld {
    StatsWorld::default()
}
