//! Pure decision step for label synchronization.

use super::LabelPrefix;
use crate::board::domain::{Label, LabelKey};
use serde::Serialize;

/// A single planned label change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "label", rename_all = "snake_case")]
pub enum LabelIntent {
    /// Remove the named label.
    Remove(String),
    /// Add the named label.
    Add(String),
}

/// Intents that leave a card with exactly one label for a prefix.
///
/// Removals always precede the addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPlan {
    target: String,
    intents: Vec<LabelIntent>,
}

impl LabelPlan {
    /// Returns the label the plan converges on.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the ordered intents.
    #[must_use]
    pub fn intents(&self) -> &[LabelIntent] {
        &self.intents
    }

    /// Reports whether the card already carries the target label.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.intents.is_empty()
    }

    /// Returns the names of labels planned for removal.
    pub fn removals(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().filter_map(|intent| match intent {
            LabelIntent::Remove(name) => Some(name.as_str()),
            LabelIntent::Add(_) => None,
        })
    }

    /// Returns the name of the label planned for addition.
    #[must_use]
    pub fn addition(&self) -> Option<&str> {
        self.intents.iter().find_map(|intent| match intent {
            LabelIntent::Add(name) => Some(name.as_str()),
            LabelIntent::Remove(_) => None,
        })
    }
}

/// Plans the changes that make `labels` carry `target` as the only label
/// under `prefix`.
///
/// When a label matching `target` (trimmed, case-insensitive) is present the
/// plan is empty, whatever other prefixed labels exist.
#[must_use]
pub fn plan_label_sync(labels: &[Label], target: &str, prefix: &LabelPrefix) -> LabelPlan {
    let target_key = LabelKey::new(target);
    if labels.iter().any(|label| label.key() == target_key) {
        return LabelPlan {
            target: target.to_owned(),
            intents: Vec::new(),
        };
    }

    let intents = labels
        .iter()
        .filter(|label| prefix.matches(label.name()))
        .map(|label| LabelIntent::Remove(label.name().to_owned()))
        .chain(std::iter::once(LabelIntent::Add(target.to_owned())))
        .collect();

    LabelPlan {
        target: target.to_owned(),
        intents,
    }
}
