//! Mark-as-merged transform
//!
//! Annotates every task with the upstream merge-automation ID so the worker
//! can report the release as merged once its branch work lands. Runs with no
//! ID configured for ordinary graph evaluations, in which case the sequence
//! passes through untouched.

use super::TransformContext;
use crate::error::Result;
use crate::keyed_by;
use crate::task::TaskDescription;
use serde_json::json;
use tracing::debug;

/// Worker key carrying the merge-automation ID
const MERGE_AUTOMATION_ID: &str = "merge-automation-id";

/// Copy the configured merge-automation ID into every task's worker payload.
///
/// Without a configured ID this is the identity: same tasks, same order.
/// With one, each task's scopes are first resolved against the run's
/// permission level, since scope declarations may vary by level.
pub fn mark_as_merged(
    ctx: &TransformContext<'_>,
    tasks: Vec<TaskDescription>,
) -> Result<Vec<TaskDescription>> {
    let Some(merge_automation_id) = ctx.params.merge_automation_id() else {
        return Ok(tasks);
    };

    debug!(merge_automation_id, "marking tasks for merge tracking");

    tasks
        .into_iter()
        .map(|mut task| {
            let scopes = std::mem::take(&mut task.scopes);
            task.scopes =
                keyed_by::resolve(scopes, &task.name, &[("level", ctx.params.level.as_str())])?;

            task.worker
                .insert(MERGE_AUTOMATION_ID.to_string(), json!(merge_automation_id));

            Ok(task)
        })
        .collect()
}
