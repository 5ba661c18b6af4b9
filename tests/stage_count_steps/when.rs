//! When steps for stage count BDD scenarios.

use super::world::StageCountWorld;
use boardsync::stages::adapters::ColumnStageClassifier;
use boardsync::stages::domain::LabelFilterChain;
use boardsync::stages::services::StageCountService;
use rstest_bdd_macros::when;

#[when(r#"stages are counted for "{labels}""#)]
fn count_stages(world: &mut StageCountWorld, labels: String) {
    let filters = LabelFilterChain::new(labels.split_whitespace().map(str::to_owned));
    let service = StageCountService::new(
        ColumnStageClassifier::default(),
        filters,
        world.limits.clone().unwrap_or_default(),
    );
    world.counts = Some(service.count(&world.cards));
}
