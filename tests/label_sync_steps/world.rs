//! Shared world state for label synchronization BDD scenarios.

use std::sync::Arc;

use boardsync::board::adapters::InMemoryBoardClient;
use boardsync::board::domain::{CardUrl, Label};
use boardsync::labeling::services::LabelingReport;
use rstest::fixture;

/// Source card details collected by the given steps.
pub struct PendingSource {
    pub url: CardUrl,
    pub title: String,
    pub column: String,
    pub references: Vec<String>,
}

/// Scenario world for label synchronization behaviour tests.
pub struct LabelSyncWorld {
    pub client: Arc<InMemoryBoardClient>,
    pub source: Option<PendingSource>,
    pub report: Option<LabelingReport>,
}

impl LabelSyncWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Arc::new(InMemoryBoardClient::new()),
            source: None,
            report: None,
        }
    }
}

impl Default for LabelSyncWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LabelSyncWorld {
    LabelSyncWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated label list from a feature file.
#[must_use]
pub fn parse_labels(labels: &str) -> Vec<Label> {
    labels
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Label::new)
        .collect()
}

/// Parses a card URL from a feature file.
pub fn parse_url(raw: &str) -> Result<CardUrl, eyre::Report> {
    CardUrl::parse(raw).map_err(|err| eyre::eyre!("invalid card url in scenario: {err}"))
}
