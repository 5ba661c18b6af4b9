//! Application services for stage counting.

mod stage_count;

pub use stage_count::{StageCountService, bucket};
