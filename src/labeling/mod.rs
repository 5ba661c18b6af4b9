//! Label synchronization across referenced cards.
//!
//! A source card's column and title each yield a canonical label. Cards the
//! source references from checklist lines are brought to carry exactly one
//! label per role, or, in preview mode, the intended changes are only
//! reported.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
