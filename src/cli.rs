//! CLI argument parsing and remote repository configuration.
use clap::Parser;
use color_eyre::eyre::eyre;
use secrecy::SecretString;
use std::env;

use crate::{forge::config::RemoteConfig, result::Result};

/// CLI arguments for one update-release-branch run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long)]
    /// Repository in owner/repo form, for example github/codeql-action.
    pub repository_nwo: String,

    #[arg(long)]
    /// The branch being merged from, typically "main" for a v2 release or
    /// "v2" for a v1 release.
    pub source_branch: String,

    #[arg(long)]
    /// The branch being merged into, typically "v2" for a v2 release or
    /// "v1" for a v1 release.
    pub target_branch: String,

    #[arg(long)]
    /// GitHub handle of the person conducting the release.
    pub conductor: String,

    #[arg(long, default_value_t = false)]
    /// Treat this release as a backport from v2 to v1.
    pub perform_v2_to_v1_backport: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Resolve the remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(eyre!("must set github token"));
        }

        let (owner, repo) = self
            .repository_nwo
            .split_once('/')
            .ok_or(eyre!("repository nwo must be in owner/repo form"))?;

        if owner.is_empty() || repo.is_empty() {
            return Err(eyre!("repository nwo must be in owner/repo form"));
        }

        Ok(RemoteConfig {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: SecretString::from(token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args(nwo: &str, token: &str) -> Args {
        Args {
            github_token: token.into(),
            repository_nwo: nwo.into(),
            source_branch: "main".into(),
            target_branch: "v2".into(),
            conductor: "alice".into(),
            perform_v2_to_v1_backport: false,
            debug: false,
        }
    }

    #[test]
    fn gets_remote_from_nwo() {
        let args = test_args("github/codeql-action", "token");

        let result = args.get_remote();
        assert!(result.is_ok());

        let remote = result.unwrap();
        assert_eq!(remote.owner, "github");
        assert_eq!(remote.repo, "codeql-action");
    }

    #[test]
    fn rejects_nwo_without_owner_and_repo() {
        let args = test_args("codeql-action", "token");
        assert!(args.get_remote().is_err());

        let args = test_args("github/", "token");
        assert!(args.get_remote().is_err());

        let args = test_args("/codeql-action", "token");
        assert!(args.get_remote().is_err());
    }
}
