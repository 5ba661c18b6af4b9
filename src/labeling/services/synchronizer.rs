//! Applies label plans to cards through the board client.

use crate::board::{
    domain::{Card, CardUrl, Label},
    ports::{BoardClient, BoardClientError},
};
use crate::labeling::domain::{LabelIntent, LabelPlan, LabelPrefix, plan_label_sync};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Whether planned label changes are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Plans are reported but nothing is written.
    #[default]
    Preview,
    /// Plans are reported and applied.
    Write,
}

impl SyncMode {
    /// Maps the `write-labels` flag onto a mode.
    #[must_use]
    pub const fn from_write_flag(write: bool) -> Self {
        if write { Self::Write } else { Self::Preview }
    }

    /// Returns the mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while applying a label plan.
#[derive(Debug, Error)]
pub enum LabelSyncError {
    /// The board client rejected a label change.
    #[error(transparent)]
    Client(#[from] BoardClientError),
}

/// Result type for label synchronization.
pub type LabelSyncResult<T> = Result<T, LabelSyncError>;

/// Reconciles a card's labels against a derived target label.
#[derive(Debug)]
pub struct LabelSynchronizer<C>
where
    C: BoardClient,
{
    client: Arc<C>,
    mode: SyncMode,
    color: Option<String>,
}

impl<C> Clone for LabelSynchronizer<C>
where
    C: BoardClient,
{
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            mode: self.mode,
            color: self.color.clone(),
        }
    }
}

impl<C> LabelSynchronizer<C>
where
    C: BoardClient,
{
    /// Creates a synchronizer writing through `client` when `mode` allows.
    #[must_use]
    pub const fn new(client: Arc<C>, mode: SyncMode) -> Self {
        Self {
            client,
            mode,
            color: None,
        }
    }

    /// Sets the color given to labels this synchronizer creates.
    #[must_use]
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    /// Returns the configured mode.
    #[must_use]
    pub const fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Makes `card` carry `target` as its only label under `prefix`.
    ///
    /// Every intent is logged in both modes. In [`SyncMode::Write`] the
    /// removals are applied before the addition.
    ///
    /// # Errors
    ///
    /// Returns [`LabelSyncError::Client`] when the board client rejects a
    /// change. Changes applied before the failure are not rolled back.
    pub async fn synchronize(
        &self,
        card: &Card,
        target: &str,
        prefix: &LabelPrefix,
    ) -> LabelSyncResult<LabelPlan> {
        let plan = plan_label_sync(card.labels(), target, prefix);
        if plan.is_noop() {
            info!(card = %card.url(), label = target, "label already exists");
            return Ok(plan);
        }

        for intent in plan.intents() {
            match intent {
                LabelIntent::Remove(name) => {
                    info!(card = %card.url(), label = %name, mode = %self.mode, "removing label");
                }
                LabelIntent::Add(name) => {
                    info!(card = %card.url(), label = %name, mode = %self.mode, "adding label");
                }
            }
        }

        if self.mode == SyncMode::Write {
            self.apply(card.url(), &plan).await?;
        }
        Ok(plan)
    }

    async fn apply(&self, card: &CardUrl, plan: &LabelPlan) -> LabelSyncResult<()> {
        for intent in plan.intents() {
            match intent {
                LabelIntent::Remove(name) => self.client.remove_label(card, name).await?,
                LabelIntent::Add(name) => {
                    let label = self.color.as_deref().map_or_else(
                        || Label::new(name.as_str()),
                        |color| Label::new(name.as_str()).with_color(color),
                    );
                    self.client.ensure_label(card, &label).await?;
                }
            }
        }
        Ok(())
    }
}
