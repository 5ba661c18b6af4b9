//! Unit tests for the labeling context.

mod service_tests;
