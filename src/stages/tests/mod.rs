//! Unit tests for the stages context.
