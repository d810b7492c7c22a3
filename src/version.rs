//! Mobile version parsing and bumping
//!
//! Versions follow the mobile release scheme: `major.minor` with an optional
//! patch component (`14.3`, `14.3.1`). The first line of the repository's
//! version file is the source of truth for the current release train.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").expect("version pattern is valid")
});

/// A version component that can be bumped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The leading release-train number
    Major,
    /// The second number
    Minor,
}

/// A parsed mobile version (`major.minor` with optional patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MobileVersion {
    /// Major (release train) number
    pub major: u32,
    /// Minor number
    pub minor: u32,
    /// Patch number, absent for versions written as `major.minor`
    pub patch: Option<u32>,
}

impl MobileVersion {
    /// Create a version without a patch component
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Return a copy with the given component incremented.
    ///
    /// Lower components reset: a major bump zeroes the minor number, and a
    /// patch component resets to 0 only when one was present to begin with
    /// (`14.3` minor-bumps to `14.4`, `14.3.1` minor-bumps to `14.4.0`).
    #[must_use]
    pub const fn bump(self, component: Component) -> Self {
        let patch = match self.patch {
            Some(_) => Some(0),
            None => None,
        };
        match component {
            Component::Major => Self {
                major: self.major + 1,
                minor: 0,
                patch,
            },
            Component::Minor => Self {
                major: self.major,
                minor: self.minor + 1,
                patch,
            },
        }
    }
}

impl FromStr for MobileVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let captures = VERSION_PATTERN
            .captures(trimmed)
            .ok_or_else(|| Error::VersionParse(s.to_string()))?;

        // Captured groups are all-digit, so parse only fails on overflow
        let number = |i: usize| -> Result<u32> {
            captures
                .get(i)
                .map_or(Ok(0), |m| m.as_str().parse())
                .map_err(|_| Error::VersionParse(s.to_string()))
        };

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: captures
                .get(3)
                .map(|m| m.as_str().parse())
                .transpose()
                .map_err(|_| Error::VersionParse(s.to_string()))?,
        })
    }
}

impl fmt::Display for MobileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
        }
        Ok(())
    }
}

/// Read and parse the version from the first line of a version file.
///
/// A missing or unreadable file is fatal; the error carries the path so the
/// decision-task failure report points at the right place.
pub fn read_version_file(path: &Path) -> Result<MobileVersion> {
    let content = fs::read_to_string(path).map_err(|source| Error::VersionFile {
        path: path.to_path_buf(),
        source,
    })?;

    let first_line = content
        .lines()
        .next()
        .ok_or_else(|| Error::VersionFileEmpty(path.to_path_buf()))?;

    first_line.parse()
}
