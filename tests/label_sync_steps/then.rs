//! Then steps for label synchronization BDD scenarios.

use super::world::{LabelSyncWorld, parse_labels, parse_url};
use boardsync::labeling::services::ReferenceStatus;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"card "{url}" has labels "{labels}""#)]
fn card_has_labels(
    world: &LabelSyncWorld,
    url: String,
    labels: String,
) -> Result<(), eyre::Report> {
    let card = world
        .client
        .card(&parse_url(&url)?)
        .wrap_err("read card from board")?
        .ok_or_else(|| eyre::eyre!("card {url} is not on the board"))?;
    let expected = parse_labels(&labels);
    if card.labels() != expected.as_slice() {
        return Err(eyre::eyre!(
            "expected labels {expected:?}, found {:?}",
            card.labels()
        ));
    }
    Ok(())
}

#[then(r#"the reference "{url}" is reported as "{status}""#)]
fn reference_reported_as(
    world: &LabelSyncWorld,
    url: String,
    status: String,
) -> Result<(), eyre::Report> {
    let report = world
        .report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing labeling report"))?;
    let outcome = report
        .references()
        .find(|outcome| outcome.reference == url)
        .ok_or_else(|| eyre::eyre!("reference {url} missing from report"))?;
    let found = match &outcome.status {
        ReferenceStatus::Synchronized { .. } => "synchronized",
        ReferenceStatus::Malformed { .. } => "malformed",
        ReferenceStatus::Unresolved { .. } => "unresolved",
        ReferenceStatus::Ineligible => "ineligible",
        ReferenceStatus::Failed { .. } => "failed",
    };
    if found != status {
        return Err(eyre::eyre!("expected status {status}, found {found}"));
    }
    Ok(())
}

#[then("no label changes are recorded")]
fn no_label_changes(world: &LabelSyncWorld) -> Result<(), eyre::Report> {
    let mutations = world.client.mutations().wrap_err("read mutation log")?;
    if !mutations.is_empty() {
        return Err(eyre::eyre!("expected no label changes, found {mutations:?}"));
    }
    Ok(())
}
