//! Integration test utilities
//!
//! Builds clients over a shared in-memory backend so tests can play
//! several users racing against one document store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
