//! The update-release-branch pipeline.
//!
//! Strictly sequential: resolve version, resolve source head, compute the
//! commit delta, derive the branch name, create the branch, update the
//! release artifacts, push, open the pull request. Empty deltas and
//! already-existing branches terminate the run early and successfully.
use chrono::Utc;
use log::*;
use std::path::PathBuf;

use crate::{
    analyzer::{
        body::{self, ReleasePlan},
        delta,
    },
    changelog::{self, Changelog},
    cli::Args,
    forge::{request::CreatePrRequest, traits::Forge},
    git::GitClient,
    result::Result,
    version::{self, VersionBumper},
};

/// Options for one update-branch run.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub source_branch: String,
    pub target_branch: String,
    pub conductor: String,
    pub backport: bool,
    pub manifest_path: PathBuf,
    pub changelog_path: PathBuf,
}

impl UpdateOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            source_branch: args.source_branch.clone(),
            target_branch: args.target_branch.clone(),
            conductor: args.conductor.clone(),
            backport: args.perform_v2_to_v1_backport,
            manifest_path: version::MANIFEST_PATH.into(),
            changelog_path: changelog::CHANGELOG_PATH.into(),
        }
    }
}

/// Compute the delta between the source and target branches, push a branch
/// updating the release artifacts, and open a draft PR for the conductor.
pub async fn execute(
    opts: &UpdateOptions,
    git: &dyn GitClient,
    forge: &dyn Forge,
    bumper: &dyn VersionBumper,
) -> Result<()> {
    let mut version = version::read_version(&opts.manifest_path)?;

    if opts.backport {
        version = version::backport_version(&version);
    }

    info!(
        "considering difference between {} and {}",
        opts.source_branch, opts.target_branch
    );

    let short_source_sha = git.short_head(&opts.source_branch)?;
    info!(
        "current head of {} is {}",
        opts.source_branch, short_source_sha
    );

    let commits = delta::commit_difference(
        git,
        forge,
        &opts.source_branch,
        &opts.target_branch,
    )
    .await?;

    if commits.is_empty() {
        info!(
            "no commits to merge from {} to {}",
            opts.source_branch, opts.target_branch
        );
        return Ok(());
    }

    // The branch name keys on the version and the merged-from head, so an
    // existing branch means a previous run already handled this pair.
    let new_branch = format!("update-v{version}-{short_source_sha}");
    info!("branch name is {new_branch}");

    // Best-effort guard only: a concurrent run can still pass this check,
    // in which case the second push fails loudly.
    if git.branch_exists_on_remote(&new_branch)? {
        info!("branch {new_branch} already exists, nothing to do");
        return Ok(());
    }

    info!("creating branch {new_branch}");
    git.create_branch(&new_branch, &opts.source_branch)?;

    let changelog = Changelog::new(&opts.changelog_path);

    if opts.backport {
        info!("setting version number to {version}");
        bumper.bump(&version)?;
        git.reset_soft()?;
        git.add(&opts.manifest_path.to_string_lossy())?;

        let lockfile =
            opts.manifest_path.with_file_name(version::LOCKFILE_PATH);
        git.add(&lockfile.to_string_lossy())?;

        info!("migrating changelog notes from v2 to v1");
        changelog.backport_headings(2, 1)?;
        git.add(&opts.changelog_path.to_string_lossy())?;
        git.amend_commit(&format!(
            "Update version and changelog for v{version}"
        ))?;
    } else {
        info!("updating changelog");
        changelog.release(&version, Utc::now().date_naive())?;
        git.add(&opts.changelog_path.to_string_lossy())?;
        git.commit(&format!("Update changelog for v{version}"))?;
    }

    git.push(&new_branch)?;

    let attribution = delta::attribute_commits(forge, &commits).await?;

    let plan = ReleasePlan {
        source_branch: opts.source_branch.clone(),
        target_branch: opts.target_branch.clone(),
        short_source_sha,
        conductor: opts.conductor.clone(),
        pull_requests: attribution.pull_requests,
        orphan_commits: attribution.orphan_commits,
        include_mergeback_reminder: !opts.backport,
    };

    // Draft, so a maintainer can flip it to ready and trigger the PR
    // checks that skip PRs created by automation.
    let pr = forge
        .create_pr(CreatePrRequest {
            head_branch: new_branch,
            base_branch: opts.target_branch.clone(),
            title: body::render_title(&opts.source_branch, &opts.target_branch),
            body: body::render_body(&plan),
            draft: true,
        })
        .await?;
    info!("created PR #{}", pr.number);

    forge.add_assignee(pr.number, &opts.conductor).await?;
    info!("assigned PR to {}", opts.conductor);

    Ok(())
}
