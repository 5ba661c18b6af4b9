//! Application services for label synchronization.

mod reference_labeler;
mod synchronizer;

pub use reference_labeler::{
    CardLabelingReport, LabelingReport, ReferenceLabelingService, ReferenceOutcome,
    ReferenceStatus, RolePlan,
};
pub use synchronizer::{LabelSyncError, LabelSyncResult, LabelSynchronizer, SyncMode};
