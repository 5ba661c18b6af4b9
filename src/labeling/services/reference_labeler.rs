//! Propagates role labels from source cards onto the cards they reference.

use crate::board::{
    domain::{Card, CardUrl},
    ports::BoardClient,
};
use crate::config::BoardConfig;
use crate::labeling::domain::{
    DerivedLabel, LabelPlan, LabelRole, RolePrefixes, derive_label, scan_references,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::LabelSynchronizer;

/// Plan applied for one label role on a referenced card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolePlan {
    /// Role the label plays.
    pub role: LabelRole,
    /// Intents computed for the role.
    pub plan: LabelPlan,
}

/// What happened to one checklist reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReferenceStatus {
    /// The referenced card was synchronized for every computable role.
    Synchronized {
        /// Plans in application order.
        plans: Vec<RolePlan>,
    },
    /// The reference is not a well-formed URL.
    Malformed {
        /// Parser diagnostic.
        reason: String,
    },
    /// The board client could not resolve the reference.
    Unresolved {
        /// Client diagnostic.
        reason: String,
    },
    /// The referenced card lacks the process-with label.
    Ineligible,
    /// Applying a plan failed part way.
    Failed {
        /// Plans completed before the failure.
        plans: Vec<RolePlan>,
        /// Client diagnostic.
        reason: String,
    },
}

/// Outcome for one reference found in a source card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceOutcome {
    /// Reference as it appeared in the body.
    pub reference: String,
    /// Result of processing it.
    pub status: ReferenceStatus,
}

/// Outcome for one source card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLabelingReport {
    /// Source card.
    pub card: CardUrl,
    /// Set when the card's column is in `skip-columns`.
    pub skipped: bool,
    /// Label derived from the card's column, when it has one.
    pub column_label: Option<DerivedLabel>,
    /// Label derived from the card's title.
    pub linked_label: DerivedLabel,
    /// Body lines holding more than one checklist marker.
    pub ambiguous_lines: Vec<usize>,
    /// Per-reference outcomes in body order.
    pub references: Vec<ReferenceOutcome>,
}

/// Outcome of a labeling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelingReport {
    /// Per-card outcomes in input order.
    pub cards: Vec<CardLabelingReport>,
}

impl LabelingReport {
    /// Returns every reference outcome across all cards.
    pub fn references(&self) -> impl Iterator<Item = &ReferenceOutcome> {
        self.cards.iter().flat_map(|card| card.references.iter())
    }

    /// Counts references that were synchronized.
    #[must_use]
    pub fn synchronized_count(&self) -> usize {
        self.references()
            .filter(|outcome| matches!(outcome.status, ReferenceStatus::Synchronized { .. }))
            .count()
    }
}

/// Scans source cards for checklist references and synchronizes the
/// referenced cards' role labels.
pub struct ReferenceLabelingService<C>
where
    C: BoardClient,
{
    client: Arc<C>,
    synchronizer: LabelSynchronizer<C>,
    config: BoardConfig,
}

impl<C> ReferenceLabelingService<C>
where
    C: BoardClient,
{
    /// Creates a service resolving and writing through `client`.
    #[must_use]
    pub fn new(client: Arc<C>, config: BoardConfig) -> Self {
        let synchronizer = LabelSynchronizer::new(Arc::clone(&client), config.sync_mode())
            .with_color(config.label_color().map(str::to_owned));
        Self {
            client,
            synchronizer,
            config,
        }
    }

    /// Processes every source card in order.
    ///
    /// Failures are recorded per reference; none stops the run.
    pub async fn process(&self, cards: &[Card]) -> LabelingReport {
        info!(
            count = cards.len(),
            mode = %self.synchronizer.mode(),
            "processing cards for reference labels"
        );
        let mut report = LabelingReport::default();
        for card in cards {
            report.cards.push(self.process_card(card).await);
        }
        report
    }

    /// Processes the references of a single source card.
    pub async fn process_card(&self, card: &Card) -> CardLabelingReport {
        let prefixes = self.config.prefixes();
        let column_label = card
            .column()
            .map(|column| derive_label(prefixes.for_role(LabelRole::Column), column));
        let linked_label = derive_label(prefixes.for_role(LabelRole::Linked), card.title());
        info!(
            card = %card.url(),
            column = card.column().unwrap_or_default(),
            column_label = column_label.as_ref().map(DerivedLabel::as_str).unwrap_or_default(),
            linked_label = %linked_label,
            "derived labels"
        );

        let mut report = CardLabelingReport {
            card: card.url().clone(),
            skipped: false,
            column_label,
            linked_label,
            ambiguous_lines: Vec::new(),
            references: Vec::new(),
        };

        if let Some(column) = card.column()
            && self.config.skips_column(column)
        {
            info!(card = %card.url(), column, "skipping card in skipped column");
            report.skipped = true;
            return report;
        }

        let scan = scan_references(card.body());
        for line in &scan.ambiguous_lines {
            warn!(
                card = %card.url(),
                line,
                "line has several checklist markers; each claims only its first url"
            );
        }
        report.ambiguous_lines = scan.ambiguous_lines;

        let labels = RoleLabels {
            column: report.column_label.as_ref(),
            linked: &report.linked_label,
        };
        let mut outcomes = Vec::with_capacity(scan.references.len());
        for reference in scan.references {
            let status = self.process_reference(card, &reference, &labels, prefixes).await;
            outcomes.push(ReferenceOutcome { reference, status });
        }
        report.references = outcomes;
        report
    }

    async fn process_reference(
        &self,
        source: &Card,
        reference: &str,
        labels: &RoleLabels<'_>,
        prefixes: &RolePrefixes,
    ) -> ReferenceStatus {
        debug!(card = %source.url(), reference, "found checklist reference");
        let url = match CardUrl::parse(reference) {
            Ok(url) => url,
            Err(err) => {
                warn!(card = %source.url(), reference, error = %err, "ignoring malformed reference");
                return ReferenceStatus::Malformed {
                    reason: err.to_string(),
                };
            }
        };

        let target = match self.client.resolve_issue(&url).await {
            Ok(target) => target,
            Err(err) => {
                warn!(card = %source.url(), reference, error = %err, "ignoring unresolvable reference");
                return ReferenceStatus::Unresolved {
                    reason: err.to_string(),
                };
            }
        };

        let gate = self.config.process_with_label();
        if !target.has_label(gate) {
            info!(
                card = %source.url(),
                reference,
                label = gate,
                "skipping reference without process-with label"
            );
            return ReferenceStatus::Ineligible;
        }

        // Both roles plan against the labels resolved above. Role prefixes
        // never overlap, so the column plan cannot touch a linked label.
        let mut plans = Vec::new();
        for (role, derived) in labels.in_order() {
            let Some(name) = derived.canonical() else {
                warn!(reference, role = %role, "no usable label derived; leaving role untouched");
                continue;
            };
            match self
                .synchronizer
                .synchronize(&target, name, prefixes.for_role(role))
                .await
            {
                Ok(plan) => plans.push(RolePlan { role, plan }),
                Err(err) => {
                    warn!(reference, role = %role, error = %err, "label synchronization failed");
                    return ReferenceStatus::Failed {
                        plans,
                        reason: err.to_string(),
                    };
                }
            }
        }
        ReferenceStatus::Synchronized { plans }
    }
}

struct RoleLabels<'a> {
    column: Option<&'a DerivedLabel>,
    linked: &'a DerivedLabel,
}

impl<'a> RoleLabels<'a> {
    fn in_order(&self) -> impl Iterator<Item = (LabelRole, &'a DerivedLabel)> {
        self.column
            .map(|label| (LabelRole::Column, label))
            .into_iter()
            .chain(std::iter::once((LabelRole::Linked, self.linked)))
    }
}
