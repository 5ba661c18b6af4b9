//! Domain model for label synchronization.
//!
//! Everything here is pure: deriving canonical label names, scanning card
//! bodies for checklist references, and planning the label changes a card
//! needs. Applying plans is left to [`crate::labeling::services`].

mod derive;
mod error;
mod plan;
mod prefix;
mod reference;

pub use derive::{DerivedLabel, INVALID_LABEL, MAX_LABEL_CHARS, derive_label};
pub use error::LabelingDomainError;
pub use plan::{LabelIntent, LabelPlan, plan_label_sync};
pub use prefix::{
    DEFAULT_COLUMN_PREFIX, DEFAULT_LINKED_PREFIX, LabelPrefix, LabelRole, RolePrefixes,
};
pub use reference::{ReferenceScan, extract_references, scan_references};
