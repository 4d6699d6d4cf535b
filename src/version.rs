//! Manifest version handling for node-style package manifests.
use color_eyre::eyre::eyre;
use semver::Version;
use serde_json::Value;
use std::{fs, path::Path};

use crate::{exec, result::Result};

/// Default manifest file read for the current version.
pub const MANIFEST_PATH: &str = "package.json";

/// Lockfile rewritten alongside the manifest by the version-bump tool.
pub const LOCKFILE_PATH: &str = "package-lock.json";

/// Read the `version` field from a package.json manifest.
pub fn read_version(path: &Path) -> Result<Version> {
    let content = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&content)?;

    let raw = doc
        .get("version")
        .and_then(Value::as_str)
        .ok_or(eyre!("no version field in {}", path.display()))?;

    Ok(Version::parse(raw)?)
}

/// Map a v2 release version to its v1 release-line equivalent. Only the
/// major component changes.
pub fn backport_version(version: &Version) -> Version {
    let mut mapped = version.clone();
    mapped.major = 1;
    mapped
}

/// Rewrites the manifest (and its lockfile) to a given version.
///
/// Implemented by [`NpmBumper`]; mocked in pipeline tests.
#[cfg_attr(test, mockall::automock)]
pub trait VersionBumper {
    fn bump(&self, version: &Version) -> Result<()>;
}

/// [`VersionBumper`] implementation shelling out to npm.
pub struct NpmBumper;

impl NpmBumper {
    pub fn new() -> Self {
        Self
    }
}

impl VersionBumper for NpmBumper {
    fn bump(&self, version: &Version) -> Result<()> {
        // --no-git-tag-version keeps npm from creating its own commit and
        // tag; the pipeline amends the result into a single commit itself.
        exec::run(
            "npm",
            &["version", &version.to_string(), "--no-git-tag-version"],
        )?;

        Ok(())
    }
}
