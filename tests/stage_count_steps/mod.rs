//! Step definitions for stage count scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
