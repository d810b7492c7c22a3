//! Task transforms applied during graph generation
//!
//! A transform takes the full ordered sequence of task descriptions for a
//! kind and re-emits it, usually after annotating each task's worker
//! payload. Order and cardinality are preserved; a transform that has
//! nothing to do returns its input unchanged rather than silently dropping
//! the sequence.

mod mark_as_merged;
mod version_bump;

pub use mark_as_merged::mark_as_merged;
pub use version_bump::version_bump;

use crate::config::GraphConfig;
use crate::error::Result;
use crate::params::Parameters;
use crate::task::TaskDescription;

/// Context shared by every transform in one graph evaluation
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    /// Immutable run parameters
    pub params: &'a Parameters,
    /// Graph configuration for the current checkout
    pub graph_config: &'a GraphConfig,
}

/// A single transform over an ordered task sequence
pub type Transform = fn(&TransformContext<'_>, Vec<TaskDescription>) -> Result<Vec<TaskDescription>>;

/// An ordered sequence of transforms applied back to back
///
/// Mirrors the framework's transform-sequence hook: each kind declares the
/// transforms to run, and the framework folds the task list through them.
#[derive(Debug, Default)]
pub struct TransformSequence {
    transforms: Vec<Transform>,
}

impl TransformSequence {
    /// Create an empty sequence
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Append a transform to the sequence
    pub fn add(&mut self, transform: Transform) -> &mut Self {
        self.transforms.push(transform);
        self
    }

    /// Fold the task list through every transform in order.
    ///
    /// The first error aborts the evaluation; no partially transformed
    /// sequence is emitted.
    pub fn apply(
        &self,
        ctx: &TransformContext<'_>,
        tasks: Vec<TaskDescription>,
    ) -> Result<Vec<TaskDescription>> {
        self.transforms
            .iter()
            .try_fold(tasks, |tasks, transform| transform(ctx, tasks))
    }
}
