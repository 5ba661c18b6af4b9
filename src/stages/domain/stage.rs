//! Stage buckets and their evaluated counts.

use super::{StageLimits, exceeds_limit};
use crate::board::domain::Card;
use indexmap::IndexMap;
use serde::Serialize;

/// Cards grouped by stage, in stage order.
///
/// Each card is held by exactly one stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageBuckets(IndexMap<String, Vec<Card>>);

impl StageBuckets {
    /// Creates empty buckets for `stages`, preserving their order.
    #[must_use]
    pub fn with_stages<I, S>(stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            stages
                .into_iter()
                .map(|stage| (stage.into(), Vec::new()))
                .collect(),
        )
    }

    /// Places `card` in `stage`, appending the stage when it is new.
    pub fn place(&mut self, stage: impl Into<String>, card: Card) {
        self.0.entry(stage.into()).or_default().push(card);
    }

    /// Returns the cards held by `stage`.
    #[must_use]
    pub fn cards(&self, stage: &str) -> Option<&[Card]> {
        self.0.get(stage).map(Vec::as_slice)
    }

    /// Returns the stage names in order.
    pub fn stages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of cards across all stages.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl IntoIterator for StageBuckets {
    type Item = (String, Vec<Card>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Count and limit state for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageData {
    /// Set when the stage holds more cards than its limit allows.
    pub flag: bool,
    /// Configured limit; `-1` means unbounded.
    pub limit: i64,
    /// Cards in the stage, kept for drill-in.
    pub items: Vec<Card>,
}

impl StageData {
    /// Evaluates `items` against `limit`.
    #[must_use]
    pub fn evaluate(items: Vec<Card>, limit: i64) -> Self {
        Self {
            flag: exceeds_limit(items.len(), limit),
            limit,
            items,
        }
    }
}

/// Per-stage counts for one label filter chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCountData {
    /// The filter chain the counts were taken for, e.g. `"Feature"`.
    pub name: String,
    /// Stage data in stage order.
    pub data: IndexMap<String, StageData>,
}

/// Cards behind one stage count, addressable by a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillIn<'a> {
    /// Identifier of the form `limits-{name}-{stage}` without spaces.
    pub identifier: String,
    /// Heading for the card list.
    pub title: String,
    /// Cards in the stage.
    pub cards: &'a [Card],
}

impl StageCountData {
    /// Returns the flagged stage names in stage order.
    pub fn flagged_stages(&self) -> impl Iterator<Item = &str> {
        self.data
            .iter()
            .filter(|(_, stage)| stage.flag)
            .map(|(name, _)| name.as_str())
    }

    /// Returns one drill-in per stage.
    #[must_use]
    pub fn drill_ins(&self) -> Vec<DrillIn<'_>> {
        self.data
            .iter()
            .map(|(stage, data)| DrillIn {
                identifier: drill_in_identifier(&self.name, stage),
                title: format!("Issues for {stage}: {}", self.name),
                cards: &data.items,
            })
            .collect()
    }
}

/// Returns the drill-in identifier for `stage` under the filter chain `name`.
#[must_use]
pub fn drill_in_identifier(name: &str, stage: &str) -> String {
    format!("limits-{name}-{stage}").replace(' ', "-")
}

/// Evaluates every bucket against its configured limit.
#[must_use]
pub fn evaluate(
    name: impl Into<String>,
    buckets: StageBuckets,
    limits: &StageLimits,
) -> StageCountData {
    let data = buckets
        .into_iter()
        .map(|(stage, cards)| {
            let limit = limits.limit_for(&stage);
            (stage, StageData::evaluate(cards, limit))
        })
        .collect();
    StageCountData {
        name: name.into(),
        data,
    }
}
