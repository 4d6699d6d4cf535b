//! Commit-difference computation and pull request attribution.
use log::*;

use crate::{
    analyzer::body::{AttributedPr, OrphanCommit},
    forge::{
        config::PR_MERGE_BOT,
        request::{AssociatedPr, ForgeCommit},
        traits::Forge,
    },
    git::GitClient,
    result::Result,
};

/// Longest commit subject rendered before truncation.
const MAX_SUBJECT_LENGTH: usize = 60;

/// True when a commit is the automatic merge commit created when a pull
/// request lands.
pub fn is_pr_merge_commit(commit: &ForgeCommit) -> bool {
    commit.committer_login.as_deref() == Some(PR_MERGE_BOT)
        && commit.parent_count > 1
}

/// Commits reachable from the source branch but not the target branch,
/// newest first, with automatic PR merge commits removed.
pub async fn commit_difference(
    git: &dyn GitClient,
    forge: &dyn Forge,
    source_branch: &str,
    target_branch: &str,
) -> Result<Vec<ForgeCommit>> {
    let mut commits = Vec::new();

    for sha in git.log_range(target_branch, source_branch)? {
        commits.push(forge.get_commit(&sha).await?);
    }

    commits.retain(|c| !is_pr_merge_commit(c));

    Ok(commits)
}

/// Classification of the delta: every commit lands in exactly one of the
/// two lists.
#[derive(Debug, Default)]
pub struct Attribution {
    /// Deduplicated, sorted ascending by number.
    pub pull_requests: Vec<AttributedPr>,
    /// Sorted ascending by author date.
    pub orphan_commits: Vec<OrphanCommit>,
}

/// Sort commits into the pull requests that introduced them, and collect
/// any commits that don't have a pull request.
pub async fn attribute_commits(
    forge: &dyn Forge,
    commits: &[ForgeCommit],
) -> Result<Attribution> {
    let mut pull_requests: Vec<AssociatedPr> = Vec::new();
    let mut orphans: Vec<ForgeCommit> = Vec::new();

    for commit in commits {
        match pr_for_commit(forge, &commit.sha).await? {
            None => orphans.push(commit.clone()),
            Some(pr) => {
                if !pull_requests.iter().any(|p| p.number == pr.number) {
                    pull_requests.push(pr);
                }
            }
        }
    }

    info!("found {} pull requests", pull_requests.len());
    info!("found {} commits not in a pull request", orphans.len());

    pull_requests.sort_by_key(|pr| pr.number);
    orphans.sort_by_key(|c| c.author_date);

    let mut attributed = Vec::new();

    for pr in pull_requests {
        // Credit whoever merged the PR rather than whoever opened it, so
        // externally-authored PRs list the maintainer who landed them.
        let merger = match pr.merge_commit_sha.as_deref() {
            Some(sha) => forge.commit_author_login(sha).await?,
            None => None,
        };

        attributed.push(AttributedPr {
            number: pr.number,
            title: pr.title,
            merger,
        });
    }

    let orphan_commits = orphans
        .into_iter()
        .map(|c| OrphanCommit {
            sha: c.sha,
            subject: truncated_subject(&c.message),
            author: c.author_login,
        })
        .collect();

    Ok(Attribution {
        pull_requests: attributed,
        orphan_commits,
    })
}

/// Earliest (lowest-numbered) pull request associated with the commit, if
/// any.
async fn pr_for_commit(
    forge: &dyn Forge,
    sha: &str,
) -> Result<Option<AssociatedPr>> {
    let mut prs = forge.pulls_for_commit(sha).await?;
    prs.sort_by_key(|pr| pr.number);

    Ok(prs.into_iter().next())
}

/// First message line, truncated so summary lines display nicely.
pub fn truncated_subject(message: &str) -> String {
    let subject = message.lines().next().unwrap_or_default();

    if subject.chars().count() > MAX_SUBJECT_LENGTH {
        let head: String = subject.chars().take(MAX_SUBJECT_LENGTH - 3).collect();
        format!("{head}...")
    } else {
        subject.to_string()
    }
}
