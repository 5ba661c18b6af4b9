//! Shared world state for stage count BDD scenarios.

use boardsync::board::domain::Card;
use boardsync::stages::domain::{StageCountData, StageLimits};
use rstest::fixture;

/// Scenario world for stage count behaviour tests.
#[derive(Default)]
pub struct StageCountWorld {
    pub cards: Vec<Card>,
    pub limits: Option<StageLimits>,
    pub counts: Option<StageCountData>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StageCountWorld {
    StageCountWorld::default()
}
