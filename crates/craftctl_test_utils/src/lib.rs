//! # craftctl test utilities
//!
//! Shared testing utilities for all crates:
//! - Scratch server directory fixtures
//! - An in-memory [`Fetch`](craftctl_core::fetch::Fetch) implementation
//! - Canned version manifests
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fetcher;
pub mod fixtures;
pub mod manifest;
pub mod strategies;

pub use fetcher::MemoryFetcher;
pub use fixtures::TestServer;

/// Re-export proptest for convenience.
pub use proptest;
