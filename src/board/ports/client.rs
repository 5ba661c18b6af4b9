//! Board client port for issue resolution and label mutation.

use crate::board::domain::{Card, CardUrl, Label};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board client operations.
pub type BoardClientResult<T> = Result<T, BoardClientError>;

/// Access to the tracker that owns the board.
///
/// Implementations talk to the tracker API (or a snapshot standing in for
/// it). Callers await each operation in turn; no operation is issued
/// concurrently for the same card.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardClient: Send + Sync {
    /// Resolves a referenced issue into a full card record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::NotFound`] when the reference does not
    /// name a known card and [`BoardClientError::Transient`] when the lookup
    /// could not be completed.
    async fn resolve_issue(&self, reference: &CardUrl) -> BoardClientResult<Card>;

    /// Removes a label from a card. Removing an absent label succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError`] when the card cannot be updated.
    async fn remove_label(&self, card: &CardUrl, name: &str) -> BoardClientResult<()>;

    /// Adds a label to a card. Adding a label whose exact name is already
    /// present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError`] when the card cannot be updated.
    async fn ensure_label(&self, card: &CardUrl, label: &Label) -> BoardClientResult<()>;
}

/// Errors returned by board client implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardClientError {
    /// No card exists for the reference.
    #[error("card not found: {0}")]
    NotFound(CardUrl),

    /// The request failed but may succeed later (rate limit, timeout).
    #[error("transient failure for {reference}: {reason}")]
    Transient {
        /// Card the request addressed.
        reference: CardUrl,
        /// Adapter diagnostic.
        reason: String,
    },

    /// The tracker could not be reached at all.
    #[error("board client unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardClientError {
    /// Wraps an adapter failure that makes the tracker unreachable.
    #[must_use]
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
