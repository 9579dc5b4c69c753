//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests.

pub mod test_fixtures;
