//! Boardsync: label propagation and stage counts for project boards.
//!
//! The crate works on a snapshot of a project board: cards with labels,
//! columns, assignees and free-text bodies. It derives two results:
//!
//! - a synchronized set of role labels carried from a source card onto the
//!   issues its checklist references, and
//! - per-stage card counts checked against work-in-progress limits.
//!
//! # Architecture
//!
//! Boardsync follows hexagonal architecture principles:
//!
//! - **Domain**: Pure label derivation, planning and stage evaluation
//! - **Ports**: Abstract trait interfaces for the tracker and stage mapping
//! - **Adapters**: Snapshot-backed and column-based implementations
//!
//! # Modules
//!
//! - [`board`]: Cards, labels and the board client port
//! - [`labeling`]: Label derivation and synchronization
//! - [`stages`]: Stage bucketing and limit flags
//! - [`config`]: Run configuration
//! - [`telemetry`]: Log subscriber setup

pub mod board;
pub mod config;
pub mod labeling;
pub mod stages;
pub mod telemetry;
