//! Seam to the framework's decision procedure
//!
//! Actions re-enter graph decision-making with a derived parameter set. The
//! decision procedure itself (target-task selection, graph generation, task
//! submission) lives in the host framework; this trait is the boundary the
//! action handlers call through, so tests can substitute a recording mock.

use crate::error::Result;
use crate::params::Parameters;
use async_trait::async_trait;
use std::path::Path;

/// The framework's decision-procedure entry point
///
/// Implementations run a full graph evaluation rooted at `root_dir` with the
/// given parameters and submit the resulting tasks. Any failure aborts the
/// whole evaluation and surfaces as a decision-task failure.
#[async_trait]
pub trait DecisionRunner: Send + Sync {
    /// Run a graph decision with the given parameters
    async fn run_decision(&self, root_dir: &Path, parameters: Parameters) -> Result<()>;
}
