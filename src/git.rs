//! System git operations for the release workflow.
use log::*;

use crate::{exec, result::Result};

/// Name of the remote every operation targets.
pub const ORIGIN: &str = "origin";

/// Version-control operations needed by the release pipeline.
///
/// Implemented by [`GitCli`] against the system git binary; mocked in
/// pipeline tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitClient {
    /// Hashes reachable from the source branch but not the target branch,
    /// newest first.
    fn log_range(
        &self,
        target_branch: &str,
        source_branch: &str,
    ) -> Result<Vec<String>>;

    /// Whether the branch exists on the remote.
    fn branch_exists_on_remote(&self, branch: &str) -> Result<bool>;

    /// Short hash of the remote branch tip.
    fn short_head(&self, branch: &str) -> Result<String>;

    /// Create and switch to a branch starting from the remote source tip.
    fn create_branch(&self, branch: &str, source_branch: &str) -> Result<()>;

    /// Stage a path.
    fn add(&self, path: &str) -> Result<()>;

    /// Commit staged changes.
    fn commit(&self, message: &str) -> Result<()>;

    /// Amend the head commit with staged changes and a new message.
    fn amend_commit(&self, message: &str) -> Result<()>;

    /// Soft-reset one commit, keeping its changes staged.
    fn reset_soft(&self) -> Result<()>;

    /// Push the branch to the remote.
    fn push(&self, branch: &str) -> Result<()>;
}

/// [`GitClient`] implementation shelling out to the system git binary.
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("running git {}", args.join(" "));
        exec::run("git", args)
    }
}

impl GitClient for GitCli {
    fn log_range(
        &self,
        target_branch: &str,
        source_branch: &str,
    ) -> Result<Vec<String>> {
        let range = format!("{ORIGIN}/{target_branch}..{ORIGIN}/{source_branch}");
        let stdout = self.run(&["log", "--pretty=format:%H", &range])?;

        Ok(stdout.split_whitespace().map(str::to_string).collect())
    }

    fn branch_exists_on_remote(&self, branch: &str) -> Result<bool> {
        let stdout = self.run(&["ls-remote", "--heads", ORIGIN, branch])?;

        Ok(!stdout.trim().is_empty())
    }

    fn short_head(&self, branch: &str) -> Result<String> {
        let git_ref = format!("{ORIGIN}/{branch}");
        let stdout = self.run(&["rev-parse", "--short", &git_ref])?;

        Ok(stdout.trim().to_string())
    }

    fn create_branch(&self, branch: &str, source_branch: &str) -> Result<()> {
        let start_point = format!("{ORIGIN}/{source_branch}");
        self.run(&["checkout", "-b", branch, &start_point])?;

        Ok(())
    }

    fn add(&self, path: &str) -> Result<()> {
        self.run(&["add", path])?;

        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])?;

        Ok(())
    }

    fn amend_commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "--amend", "-m", message])?;

        Ok(())
    }

    fn reset_soft(&self) -> Result<()> {
        self.run(&["reset", "--soft", "HEAD~1"])?;

        Ok(())
    }

    fn push(&self, branch: &str) -> Result<()> {
        self.run(&["push", ORIGIN, branch])?;

        Ok(())
    }
}
