//! Given steps for stage count BDD scenarios.

use super::world::StageCountWorld;
use boardsync::board::domain::{Card, CardUrl, Label};
use boardsync::stages::domain::limit_key;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"{count:usize} "{label}" cards in column "{column}""#)]
fn cards_in_column(
    world: &mut StageCountWorld,
    count: usize,
    label: String,
    column: String,
) -> Result<(), eyre::Report> {
    for _ in 0..count {
        let number = world.cards.len() + 1;
        let url = CardUrl::parse(&format!("https://github.com/acme/app/issues/{number}"))
            .wrap_err("build card url")?;
        let card = Card::new(url, format!("Card {number}"))
            .wrap_err("build card")?
            .with_column(column.clone())
            .with_labels(vec![Label::new(label.clone())]);
        world.cards.push(card);
    }
    Ok(())
}

#[given(r#"the "{stage}" limit is {limit:i64}"#)]
fn stage_limit(world: &mut StageCountWorld, stage: String, limit: i64) {
    let limits = world.limits.take().unwrap_or_default();
    world.limits = Some(limits.with_limit(limit_key(&stage), limit));
}
