//! Step definitions for label synchronization scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
