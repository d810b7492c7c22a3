//! Graph configuration handle
//!
//! The framework hands extension points a configuration object rooted at the
//! repository checkout. The only piece this crate reads beyond the root
//! itself is the version file.

use std::path::{Path, PathBuf};

/// Filename of the version file at the repository root
const VERSION_FILE: &str = "version.txt";

/// Configuration for one task-graph checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Repository root the graph is generated from
    pub root_dir: PathBuf,
}

impl GraphConfig {
    /// Create a graph configuration rooted at `root_dir`
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Path to the version file at the repository root
    #[must_use]
    pub fn version_file(&self) -> PathBuf {
        self.root_dir.join(VERSION_FILE)
    }

    /// The repository root
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}
