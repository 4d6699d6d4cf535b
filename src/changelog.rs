//! Changelog updates for release and backport runs.
use chrono::NaiveDate;
use regex::Regex;
use semver::Version;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::result::Result;

/// Default changelog file updated by the pipeline.
pub const CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Placeholder heading marking the section pending a real version/date.
pub const UNRELEASED_MARKER: &str = "[UNRELEASED]";

/// Seed content used when a repository has no changelog yet.
const EMPTY_CHANGELOG: &str = "# Changelog

## [UNRELEASED]

No user facing changes.

";

/// Changelog file store.
pub struct Changelog {
    path: PathBuf,
}

impl Changelog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the first unreleased sentinel with the released version and
    /// date heading. Seeds the empty template when the file is missing.
    pub fn release(&self, version: &Version, date: NaiveDate) -> Result<()> {
        let content = if self.path.exists() {
            fs::read_to_string(&self.path)?
        } else {
            EMPTY_CHANGELOG.to_string()
        };

        fs::write(&self.path, release_heading(&content, version, date))?;

        Ok(())
    }

    /// Rewrite major-version section headings for a backport.
    pub fn backport_headings(
        &self,
        from_major: u64,
        to_major: u64,
    ) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;

        fs::write(
            &self.path,
            rewrite_major_headings(&content, from_major, to_major)?,
        )?;

        Ok(())
    }
}

fn release_heading(content: &str, version: &Version, date: NaiveDate) -> String {
    let heading = format!("{version} - {}", date.format("%d %b %Y"));
    content.replacen(UNRELEASED_MARKER, &heading, 1)
}

fn rewrite_major_headings(
    content: &str,
    from_major: u64,
    to_major: u64,
) -> Result<String> {
    let re = Regex::new(&format!(r"(?m)^## {from_major}\."))?;

    Ok(re
        .replace_all(content, format!("## {to_major}."))
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version() -> Version {
        Version::parse("2.3.1").unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn replaces_first_sentinel_only() {
        let content = "# Changelog\n\n## [UNRELEASED]\n\n- a change\n\n## [UNRELEASED]\n";

        let released = release_heading(content, &version(), date());

        assert_eq!(
            released,
            "# Changelog\n\n## 2.3.1 - 05 Jan 2024\n\n- a change\n\n## [UNRELEASED]\n"
        );
    }

    #[test]
    fn leaves_content_without_sentinel_untouched() {
        let content = "# Changelog\n\n## 2.3.0 - 01 Jan 2024\n";
        assert_eq!(release_heading(content, &version(), date()), content);
    }

    #[test]
    fn rewrites_major_version_headings() {
        let content = "# Changelog\n\n## 2.3.1 - 05 Jan 2024\n\nv2. mentioned in prose stays.\n\n## 2.2.0 - 01 Dec 2023\n";

        let rewritten = rewrite_major_headings(content, 2, 1).unwrap();

        assert_eq!(
            rewritten,
            "# Changelog\n\n## 1.3.1 - 05 Jan 2024\n\nv2. mentioned in prose stays.\n\n## 1.2.0 - 01 Dec 2023\n"
        );
    }

    #[test]
    fn seeds_template_when_changelog_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let changelog = Changelog::new(dir.path().join("CHANGELOG.md"));

        changelog.release(&version(), date()).unwrap();

        let content = fs::read_to_string(changelog.path()).unwrap();
        assert!(content.starts_with("# Changelog"));
        assert!(content.contains("## 2.3.1 - 05 Jan 2024"));
        assert!(!content.contains(UNRELEASED_MARKER));
    }

    #[test]
    fn releases_existing_changelog_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, "# Changelog\n\n## [UNRELEASED]\n\n- fix thing\n")
            .unwrap();

        Changelog::new(&path).release(&version(), date()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("## 2.3.1 - 05 Jan 2024"));
        assert!(content.contains("- fix thing"));
    }
}
