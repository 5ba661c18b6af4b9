//! Then steps for stage count BDD scenarios.

use super::world::StageCountWorld;
use boardsync::stages::domain::StageData;
use rstest_bdd_macros::then;

fn stage<'a>(world: &'a StageCountWorld, name: &str) -> Result<&'a StageData, eyre::Report> {
    world
        .counts
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stage counts"))?
        .data
        .get(name)
        .ok_or_else(|| eyre::eyre!("stage {name} missing from counts"))
}

#[then(r#"stage "{name}" holds {count:usize} cards"#)]
fn stage_holds(world: &StageCountWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let found = stage(world, &name)?.items.len();
    if found != count {
        return Err(eyre::eyre!("expected {count} cards in {name}, found {found}"));
    }
    Ok(())
}

#[then(r#"stage "{name}" is flagged"#)]
fn stage_is_flagged(world: &StageCountWorld, name: String) -> Result<(), eyre::Report> {
    if !stage(world, &name)?.flag {
        return Err(eyre::eyre!("expected {name} to be flagged"));
    }
    Ok(())
}

#[then(r#"stage "{name}" is not flagged"#)]
fn stage_is_not_flagged(world: &StageCountWorld, name: String) -> Result<(), eyre::Report> {
    if stage(world, &name)?.flag {
        return Err(eyre::eyre!("expected {name} not to be flagged"));
    }
    Ok(())
}
