//! Version-bump transform
//!
//! Adds the git branch configuration to the worker payload: the release
//! branch to create (for tasks that declare branch-creation intent), the
//! bumped mainline version, and the source branch the graph ran from.

use super::TransformContext;
use crate::error::{Error, Result};
use crate::params::Behavior;
use crate::task::{CREATE_BRANCH_INFO, TaskDescription};
use crate::version::{Component, MobileVersion, read_version_file};
use serde_json::{Value, json};
use tracing::debug;

/// Worker key for the bumped mainline version
const NEXT_VERSION: &str = "next-version";

/// Worker key for the source branch
const BRANCH: &str = "branch";

/// Worker key for the release branch name, inside `create-branch-info`
const BRANCH_NAME: &str = "branch-name";

/// Branch name and bumped version for one behavior
const fn branch_plan(behavior: Behavior, version: MobileVersion) -> (Component, BranchName) {
    match behavior {
        // New release train branches off the current major
        Behavior::Major => (Component::Major, BranchName::Major(version.major)),
        // Dot release branches off the current major.minor
        Behavior::Minor => (
            Component::Minor,
            BranchName::MajorMinor(version.major, version.minor),
        ),
    }
}

enum BranchName {
    Major(u32),
    MajorMinor(u32, u32),
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major(major) => write!(f, "release/v{major}"),
            Self::MajorMinor(major, minor) => write!(f, "release/v{major}.{minor}"),
        }
    }
}

/// Write branch and version configuration into every task's worker payload.
///
/// The version file is re-read for each task rather than cached across the
/// sequence. Tasks without `create-branch-info` get no branch name, but
/// `next-version` and `branch` are written unconditionally. The behavior
/// defaults to major when no merge config is present, so a full graph
/// evaluation outside the action still yields valid tasks.
pub fn version_bump(
    ctx: &TransformContext<'_>,
    tasks: Vec<TaskDescription>,
) -> Result<Vec<TaskDescription>> {
    tasks
        .into_iter()
        .map(|mut task| {
            let version_file = ctx.graph_config.version_file();
            let mut version = read_version_file(&version_file)?;

            if task.has_create_branch_info() {
                let behavior = ctx.params.behavior();
                let (component, branch_name) = branch_plan(behavior, version);

                debug!(
                    task = %task.name,
                    %behavior,
                    branch = %branch_name,
                    "configuring release branch"
                );

                let Some(Value::Object(info)) = task.worker.get_mut(CREATE_BRANCH_INFO) else {
                    return Err(Error::Worker {
                        task: task.name,
                        reason: format!("{CREATE_BRANCH_INFO} must be an object"),
                    });
                };
                info.insert(BRANCH_NAME.to_string(), json!(branch_name.to_string()));
                version = version.bump(component);
            }

            task.worker
                .insert(NEXT_VERSION.to_string(), json!(version.to_string()));
            task.worker
                .insert(BRANCH.to_string(), json!(ctx.params.head_ref));

            Ok(task)
        })
        .collect()
}
