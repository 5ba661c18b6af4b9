//! Board snapshot model and tracker access.
//!
//! The board context owns the card and label types every pipeline consumes,
//! the [`ports::BoardClient`] contract for resolving references and mutating
//! labels, and the snapshot-backed adapters used when no live tracker is
//! involved:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
