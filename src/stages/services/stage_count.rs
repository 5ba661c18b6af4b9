//! Service composing filtering, bucketing and limit evaluation.

use crate::board::domain::Card;
use crate::stages::{
    domain::{LabelFilterChain, StageBuckets, StageCountData, StageLimits, evaluate},
    ports::StageClassifier,
};
use tracing::{info, warn};

/// Groups `cards` into stages using `classifier`.
///
/// Declared stages come first, in declaration order, even when empty; any
/// other stage follows in the order its first card appears.
#[must_use]
pub fn bucket<S>(cards: Vec<Card>, classifier: &S) -> StageBuckets
where
    S: StageClassifier + ?Sized,
{
    let mut buckets = StageBuckets::with_stages(classifier.declared_stages());
    for card in cards {
        let stage = classifier.classify(&card);
        buckets.place(stage, card);
    }
    buckets
}

/// Stage count orchestration service.
#[derive(Debug, Clone)]
pub struct StageCountService<S>
where
    S: StageClassifier,
{
    classifier: S,
    filters: LabelFilterChain,
    limits: StageLimits,
}

impl<S> StageCountService<S>
where
    S: StageClassifier,
{
    /// Creates a service counting cards that pass `filters`.
    #[must_use]
    pub const fn new(classifier: S, filters: LabelFilterChain, limits: StageLimits) -> Self {
        Self {
            classifier,
            filters,
            limits,
        }
    }

    /// Filters, buckets and evaluates `cards`.
    #[must_use]
    pub fn count(&self, cards: &[Card]) -> StageCountData {
        let filtered = self.filters.apply(cards);
        let buckets = bucket(filtered.cards, &self.classifier);
        let counts = evaluate(filtered.name, buckets, &self.limits);
        for (stage, data) in &counts.data {
            if data.flag {
                warn!(stage = %stage, count = data.items.len(), limit = data.limit, "stage over limit");
            } else {
                info!(stage = %stage, count = data.items.len(), limit = data.limit, "stage within limit");
            }
        }
        counts
    }
}
