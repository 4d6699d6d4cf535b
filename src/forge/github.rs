//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{AssociatedPr, CreatePrRequest, ForgeCommit, PullRequest},
        traits::Forge,
    },
    result::Result,
};

#[derive(Debug, Deserialize)]
struct UserRef {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitActor {
    date: String,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
    author: GitActor,
}

#[derive(Debug, Deserialize)]
struct ParentRef {
    #[allow(unused)]
    sha: String,
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    commit: CommitDetail,
    author: Option<UserRef>,
    committer: Option<UserRef>,
    parents: Vec<ParentRef>,
}

#[derive(Debug, Deserialize)]
struct AssociatedPrResponse {
    number: u64,
    title: String,
    merge_commit_sha: Option<String>,
}

/// GitHub forge implementation using Octocrab for commit, pull request,
/// and assignee interactions.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create a GitHub client with personal access token authentication.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .build()?;

        Ok(Self { config, instance })
    }

    fn commit_route(&self, sha: &str) -> String {
        format!(
            "/repos/{}/{}/commits/{}",
            self.config.owner, self.config.repo, sha
        )
    }

    async fn fetch_commit(&self, sha: &str) -> Result<CommitResponse> {
        let commit: CommitResponse =
            self.instance.get(self.commit_route(sha), None::<&()>).await?;

        Ok(commit)
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_commit(&self, sha: &str) -> Result<ForgeCommit> {
        let commit = self.fetch_commit(sha).await?;

        let author_date =
            DateTime::parse_from_rfc3339(&commit.commit.author.date)?
                .with_timezone(&Utc);

        Ok(ForgeCommit {
            sha: commit.sha,
            message: commit.commit.message,
            author_login: commit.author.map(|u| u.login),
            author_date,
            committer_login: commit.committer.map(|u| u.login),
            parent_count: commit.parents.len(),
        })
    }

    async fn pulls_for_commit(&self, sha: &str) -> Result<Vec<AssociatedPr>> {
        let route = format!("{}/pulls", self.commit_route(sha));
        let prs: Vec<AssociatedPrResponse> =
            self.instance.get(route, None::<&()>).await?;

        Ok(prs
            .into_iter()
            .map(|pr| AssociatedPr {
                number: pr.number,
                title: pr.title,
                merge_commit_sha: pr.merge_commit_sha,
            })
            .collect())
    }

    async fn commit_author_login(&self, sha: &str) -> Result<Option<String>> {
        let commit = self.fetch_commit(sha).await?;

        Ok(commit.author.map(|u| u.login))
    }

    async fn create_pr(&self, req: CreatePrRequest) -> Result<PullRequest> {
        let pr = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .create(req.title, req.head_branch, req.base_branch)
            .body(req.body)
            .draft(req.draft)
            .send()
            .await?;

        Ok(PullRequest { number: pr.number })
    }

    async fn add_assignee(&self, pr_number: u64, assignee: &str) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .update(pr_number)
            .assignees(&[assignee.to_string()])
            .send()
            .await?;

        Ok(())
    }
}
