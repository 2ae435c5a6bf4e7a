//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - The in-memory repositories enforce the same uniqueness and limit rules
//!   as the PostgreSQL adapters, so service tests exercise real behavior

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
