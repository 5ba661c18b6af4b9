//! Domain model for board snapshots.
//!
//! Cards and labels are owned by the crawl that produced the snapshot. The
//! domain treats them as read-mostly values; label changes flow through the
//! [`BoardClient`](crate::board::ports::BoardClient) port.

mod card;
mod error;
mod label;

pub use card::{Assignee, Card, CardUrl};
pub use error::BoardDomainError;
pub use label::{Label, LabelKey};
