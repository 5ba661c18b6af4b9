//! Given steps for label synchronization BDD scenarios.

use super::world::{LabelSyncWorld, PendingSource, parse_labels, parse_url};
use boardsync::board::domain::Card;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a source card "{url}" titled "{title}" in column "{column}""#)]
fn source_card(
    world: &mut LabelSyncWorld,
    url: String,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    world.source = Some(PendingSource {
        url: parse_url(&url)?,
        title,
        column,
        references: Vec::new(),
    });
    Ok(())
}

#[given(r#"a referenced card "{url}" titled "{title}" with labels "{labels}""#)]
fn referenced_card(
    world: &mut LabelSyncWorld,
    url: String,
    title: String,
    labels: String,
) -> Result<(), eyre::Report> {
    let card = Card::new(parse_url(&url)?, title)
        .wrap_err("build referenced card")?
        .with_labels(parse_labels(&labels));
    world
        .client
        .insert(card)
        .wrap_err("seed referenced card")?;
    Ok(())
}

#[given(r#"the source card references "{url}""#)]
fn source_references(world: &mut LabelSyncWorld, url: String) -> Result<(), eyre::Report> {
    let source = world
        .source
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing source card in scenario world"))?;
    source.references.push(url);
    Ok(())
}
