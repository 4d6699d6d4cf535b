use chrono::{DateTime, Utc};

/// Represents a normalized commit returned from the forge.
#[derive(Debug, Clone)]
pub struct ForgeCommit {
    pub sha: String,
    /// Full commit message; summary lines use the first line only.
    pub message: String,
    /// Login of the platform user recorded as author, when one exists.
    pub author_login: Option<String>,
    pub author_date: DateTime<Utc>,
    /// Login of the platform user recorded as committer, when one exists.
    pub committer_login: Option<String>,
    pub parent_count: usize,
}

/// A pull request the forge associates with a commit.
#[derive(Debug, Clone)]
pub struct AssociatedPr {
    pub number: u64,
    pub title: String,
    pub merge_commit_sha: Option<String>,
}

/// Handle to a created pull request.
#[derive(Debug, Clone)]
pub struct PullRequest {
    pub number: u64,
}

/// Request to create a new pull request.
#[derive(Debug, Clone)]
pub struct CreatePrRequest {
    pub head_branch: String,
    pub base_branch: String,
    pub title: String,
    pub body: String,
    pub draft: bool,
}
