//! Traits related to the remote forge
use async_trait::async_trait;

use crate::{
    forge::request::{AssociatedPr, CreatePrRequest, ForgeCommit, PullRequest},
    result::Result,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// Full commit metadata for a sha.
    async fn get_commit(&self, sha: &str) -> Result<ForgeCommit>;

    /// Pull requests the forge associates with a commit.
    async fn pulls_for_commit(&self, sha: &str) -> Result<Vec<AssociatedPr>>;

    /// Login of the platform user recorded as author of a commit.
    async fn commit_author_login(&self, sha: &str) -> Result<Option<String>>;

    /// Open a pull request.
    async fn create_pr(&self, req: CreatePrRequest) -> Result<PullRequest>;

    /// Assign a user to a pull request.
    async fn add_assignee(&self, pr_number: u64, assignee: &str) -> Result<()>;
}
