//! Integration tests driving the public API and the built binary.

pub mod binary_test;
pub mod common;
pub mod config_test;
pub mod core_test;
