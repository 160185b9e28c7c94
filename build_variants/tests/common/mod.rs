//! Shared fixtures for builder integration tests.
//!
//! Variant maps reused by several scenarios live here so the expected
//! outputs in each test file stay in step with a single definition.

pub mod styles;
