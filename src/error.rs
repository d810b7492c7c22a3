//! Error types for mergeday

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the merge-day extension points
///
/// Every variant is fatal to the current graph evaluation: the framework
/// surfaces it as a decision-task failure. There is no retry or
/// partial-failure recovery at this layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A version string did not match the mobile version grammar
    #[error("invalid version string: {0:?}")]
    VersionParse(String),

    /// The version file could not be read
    #[error("failed to read version file {path}: {source}")]
    VersionFile {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The version file exists but holds no version line
    #[error("version file {0} is empty")]
    VersionFileEmpty(PathBuf),

    /// A merge-automation behavior outside the closed major/minor set
    #[error("unknown merge-automation behavior: {0}")]
    UnknownBehavior(String),

    /// A `by-*` conditioned value had no alternative for the current context
    #[error("keyed-by resolution failed for {item}: {reason}")]
    KeyedBy {
        /// Task or item name the value belongs to
        item: String,
        /// What went wrong
        reason: String,
    },

    /// A task's worker payload did not have the expected shape
    #[error("invalid worker payload for task {task}: {reason}")]
    Worker {
        /// Task name
        task: String,
        /// What went wrong
        reason: String,
    },

    /// Action input failed to deserialize into the typed input record
    #[error("invalid action input: {0}")]
    ActionInput(String),

    /// The framework's decision procedure reported a failure
    #[error("decision task failed: {0}")]
    Decision(String),
}
