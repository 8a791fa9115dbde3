//! Target Python version handling.
//!
//! `typing.NotRequired` landed in Python 3.11; older targets have to pull
//! it from `typing_extensions`. The target version is fixed at backend
//! construction and decides that one output choice.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

/// Python version the generated module targets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetVersion(Version);

#[derive(Debug, thiserror::Error)]
#[error("invalid target version {input:?}: {source}")]
pub struct VersionError {
    input: String,
    source: semver::Error,
}

impl TargetVersion {
    /// Parse a `major.minor.patch` version string.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        Version::parse(input)
            .map(TargetVersion)
            .map_err(|source| VersionError {
                input: input.to_string(),
                source,
            })
    }

    /// Whether `NotRequired` must come from `typing_extensions`.
    ///
    /// True for every target below 3.11.0; 3.11.0 itself counts as native.
    pub fn needs_not_required_shim(&self) -> bool {
        self.0 < Version::new(3, 11, 0)
    }
}

impl Default for TargetVersion {
    fn default() -> Self {
        TargetVersion(Version::new(3, 10, 0))
    }
}

impl FromStr for TargetVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetVersion::parse(s)
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
