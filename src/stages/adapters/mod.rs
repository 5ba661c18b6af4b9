//! Adapter implementations for stage ports.

pub mod column;

pub use column::{ColumnStageClassifier, DEFAULT_STAGES, NO_COLUMN_STAGE, default_stage_columns};
