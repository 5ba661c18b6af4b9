//! When steps for label synchronization BDD scenarios.

use std::sync::Arc;

use super::world::{LabelSyncWorld, run_async};
use boardsync::board::domain::Card;
use boardsync::config::BoardConfig;
use boardsync::labeling::services::ReferenceLabelingService;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("labels are synchronized in {mode} mode")]
fn synchronize_labels(world: &mut LabelSyncWorld, mode: String) -> Result<(), eyre::Report> {
    let write = match mode.as_str() {
        "write" => true,
        "preview" => false,
        other => return Err(eyre::eyre!("unknown sync mode in scenario: {other}")),
    };
    let source = world
        .source
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing source card in scenario world"))?;
    let body = source
        .references
        .iter()
        .map(|reference| format!("- [ ] {reference}"))
        .collect::<Vec<_>>()
        .join("\n");
    let card = Card::new(source.url.clone(), source.title.clone())
        .wrap_err("build source card")?
        .with_column(source.column.clone())
        .with_body(body);
    world
        .client
        .insert(card.clone())
        .wrap_err("seed source card")?;

    let config = BoardConfig::default().with_write_labels(write);
    let service = ReferenceLabelingService::new(Arc::clone(&world.client), config);
    world.report = Some(run_async(service.process(&[card])));
    Ok(())
}
