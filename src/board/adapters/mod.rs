//! Adapter implementations for board ports.

pub mod memory;
pub mod snapshot;

pub use memory::{InMemoryBoardClient, LabelMutation};
pub use snapshot::{BoardSnapshot, SnapshotError};
