//! Port contracts for board access.
//!
//! Ports define infrastructure-agnostic interfaces used by labeling services.

pub mod client;

#[cfg(test)]
pub use client::MockBoardClient;
pub use client::{BoardClient, BoardClientError, BoardClientResult};
