//! Stage classification port.

use crate::board::domain::Card;

/// Maps cards onto workflow stages.
///
/// Implementations must place every card in some stage so that buckets
/// partition their input.
pub trait StageClassifier: Send + Sync {
    /// Returns the stages every count reports, in display order, even when
    /// empty.
    fn declared_stages(&self) -> Vec<String>;

    /// Returns the stage `card` belongs to.
    fn classify(&self, card: &Card) -> String;
}
