//! Domain model for stage counts.
//!
//! Cards are narrowed by a label filter chain, grouped into stage buckets,
//! and each bucket is evaluated against its work-in-progress limit.

mod filter;
mod limits;
mod stage;

pub use filter::{FilteredCards, LabelFilterChain};
pub use limits::{
    DEFAULT_STAGE_LIMIT, LIMIT_KEY_SUFFIX, StageLimits, UNBOUNDED_LIMIT, exceeds_limit, limit_key,
};
pub use stage::{
    DrillIn, StageBuckets, StageCountData, StageData, drill_in_identifier, evaluate,
};
