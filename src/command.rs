//! Command implementations.

/// The update-release-branch pipeline.
pub mod update_branch;
