//! Port contracts for stage counting.

pub mod classifier;

pub use classifier::StageClassifier;
