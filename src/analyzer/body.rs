//! Pure rendering of the release PR title and body.
//!
//! All logins, messages, and ordering are resolved by the caller before
//! rendering; nothing here touches the forge.

/// One pull request attributed to the delta, credited to whoever merged
/// it rather than whoever opened it.
#[derive(Debug, Clone)]
pub struct AttributedPr {
    pub number: u64,
    pub title: String,
    pub merger: Option<String>,
}

/// A delta commit with no associated pull request.
#[derive(Debug, Clone)]
pub struct OrphanCommit {
    pub sha: String,
    pub subject: String,
    pub author: Option<String>,
}

/// Fully-resolved inputs for rendering the release PR.
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    pub source_branch: String,
    pub target_branch: String,
    pub short_source_sha: String,
    pub conductor: String,
    /// Sorted ascending by number.
    pub pull_requests: Vec<AttributedPr>,
    /// Sorted ascending by author date.
    pub orphan_commits: Vec<OrphanCommit>,
    pub include_mergeback_reminder: bool,
}

pub fn render_title(source_branch: &str, target_branch: &str) -> String {
    format!("Merge {source_branch} into {target_branch}")
}

/// Render the PR body.
pub fn render_body(plan: &ReleasePlan) -> String {
    let mut body = vec![
        format!(
            "Merging {} into {}",
            plan.short_source_sha, plan.target_branch
        ),
        String::new(),
        format!("Conductor for this PR is @{}", plan.conductor),
    ];

    if !plan.pull_requests.is_empty() {
        body.push(String::new());
        body.push("Contains the following pull requests:".to_string());

        for pr in &plan.pull_requests {
            let merger = pr
                .merger
                .as_ref()
                .map(|m| format!(" (@{m})"))
                .unwrap_or_default();
            body.push(format!("- #{} - {}{merger}", pr.number, pr.title));
        }
    }

    if !plan.orphan_commits.is_empty() {
        body.push(String::new());
        body.push(
            "Contains the following commits not from a pull request:"
                .to_string(),
        );

        for commit in &plan.orphan_commits {
            let author = commit
                .author
                .as_ref()
                .map(|a| format!(" (@{a})"))
                .unwrap_or_default();
            body.push(format!("- {} - {}{author}", commit.sha, commit.subject));
        }
    }

    body.push(String::new());
    body.push("Please review the following:".to_string());
    body.push(
        " - [ ] The CHANGELOG displays the correct version and date."
            .to_string(),
    );
    body.push(
        " - [ ] The CHANGELOG includes all relevant, user-facing changes since the last release."
            .to_string(),
    );
    body.push(format!(
        " - [ ] There are no unexpected commits being merged into the {} branch.",
        plan.target_branch
    ));
    body.push(
        " - [ ] The docs team is aware of any documentation changes that need to be released."
            .to_string(),
    );

    if plan.include_mergeback_reminder {
        body.push(format!(
            " - [ ] The mergeback PR is merged back into {} after this PR is merged.",
            plan.source_branch
        ));
    }

    body.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> ReleasePlan {
        ReleasePlan {
            source_branch: "main".into(),
            target_branch: "v2".into(),
            short_source_sha: "abc1234".into(),
            conductor: "alice".into(),
            pull_requests: vec![
                AttributedPr {
                    number: 101,
                    title: "Add thing".into(),
                    merger: Some("bob".into()),
                },
                AttributedPr {
                    number: 105,
                    title: "Fix thing".into(),
                    merger: None,
                },
            ],
            orphan_commits: vec![OrphanCommit {
                sha: "deadbeef".into(),
                subject: "Tweak config".into(),
                author: Some("carol".into()),
            }],
            include_mergeback_reminder: true,
        }
    }

    #[test]
    fn renders_title() {
        assert_eq!(render_title("main", "v2"), "Merge main into v2");
    }

    #[test]
    fn renders_full_body() {
        let expected = "\
Merging abc1234 into v2

Conductor for this PR is @alice

Contains the following pull requests:
- #101 - Add thing (@bob)
- #105 - Fix thing

Contains the following commits not from a pull request:
- deadbeef - Tweak config (@carol)

Please review the following:
 - [ ] The CHANGELOG displays the correct version and date.
 - [ ] The CHANGELOG includes all relevant, user-facing changes since the last release.
 - [ ] There are no unexpected commits being merged into the v2 branch.
 - [ ] The docs team is aware of any documentation changes that need to be released.
 - [ ] The mergeback PR is merged back into main after this PR is merged.";

        assert_eq!(render_body(&test_plan()), expected);
    }

    #[test]
    fn omits_empty_sections_and_mergeback_reminder() {
        let plan = ReleasePlan {
            pull_requests: vec![],
            orphan_commits: vec![],
            include_mergeback_reminder: false,
            ..test_plan()
        };

        let expected = "\
Merging abc1234 into v2

Conductor for this PR is @alice

Please review the following:
 - [ ] The CHANGELOG displays the correct version and date.
 - [ ] The CHANGELOG includes all relevant, user-facing changes since the last release.
 - [ ] There are no unexpected commits being merged into the v2 branch.
 - [ ] The docs team is aware of any documentation changes that need to be released.";

        assert_eq!(render_body(&plan), expected);
    }

    #[test]
    fn omits_author_suffix_for_commits_without_platform_user() {
        let plan = ReleasePlan {
            pull_requests: vec![],
            orphan_commits: vec![OrphanCommit {
                sha: "deadbeef".into(),
                subject: "Tweak config".into(),
                author: None,
            }],
            ..test_plan()
        };

        assert!(render_body(&plan).contains("- deadbeef - Tweak config\n"));
    }
}
