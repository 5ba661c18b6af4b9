//! Successive label filters narrowing the card set before bucketing.

use crate::board::domain::Card;
use tracing::info;

/// Cards surviving a filter chain, with the chain's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredCards {
    /// Filter labels joined by single spaces.
    pub name: String,
    /// Cards carrying every filter label.
    pub cards: Vec<Card>,
}

/// Ordered list of labels a card must carry to be counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilterChain {
    labels: Vec<String>,
}

impl LabelFilterChain {
    /// Creates a chain from labels in application order. Blank entries are
    /// dropped.
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            labels: labels
                .into_iter()
                .map(|label| label.trim().to_owned())
                .filter(|label| !label.is_empty())
                .collect(),
        }
    }

    /// Returns the filter labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the chain name: the labels joined by single spaces.
    #[must_use]
    pub fn name(&self) -> String {
        self.labels.join(" ")
    }

    /// Narrows `cards` by each label in turn, logging the count after every
    /// step. Label matching is case-insensitive.
    #[must_use]
    pub fn apply(&self, cards: &[Card]) -> FilteredCards {
        info!(count = cards.len(), "cards on board before filtering");
        let mut remaining: Vec<Card> = cards.to_vec();
        for label in &self.labels {
            let before = remaining.len();
            remaining.retain(|card| card.has_label(label));
            info!(label = %label, before, after = remaining.len(), "filtered cards by label");
        }
        FilteredCards {
            name: self.name(),
            cards: remaining,
        }
    }
}
