//! GitHub forge access.
//!
//! Provides token-based authentication, commit and pull request lookups,
//! and pull request creation through a common trait.

/// Configuration for the forge remote.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Shared data types for commits and pull requests.
pub mod request;

/// Common trait for forge access.
pub mod traits;
