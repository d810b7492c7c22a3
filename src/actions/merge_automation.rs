//! Merge Day Automation action
//!
//! Triggers the release-branching workflow: a new graph evaluation whose
//! target tasks perform the branch merge, version bump, and push (or a dry
//! run of them) on the repository.

use super::registry::ActionDefinition;
use crate::config::GraphConfig;
use crate::decision::DecisionRunner;
use crate::error::{Error, Result};
use crate::params::{Behavior, MergeConfig, Parameters};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

/// User input for the merge-automation action
///
/// All fields are optional at the type level; the framework validates the
/// raw input against the action schema (which requires `behavior`) before
/// the handler runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MergeAutomationInput {
    /// Override other options and do not push changes
    pub force_dry_run: Option<bool>,
    /// The type of release promotion to perform
    pub behavior: Option<Behavior>,
    /// Upstream merge-automation ID for marking as merged
    pub merge_automation_id: Option<u64>,
}

impl MergeAutomationInput {
    /// Parse the raw JSON input the framework delivers
    pub fn from_value(input: Value) -> Result<Self> {
        serde_json::from_value(input).map_err(|e| Error::ActionInput(e.to_string()))
    }
}

/// The registered definition for the merge-automation action
#[must_use]
pub fn merge_automation_definition() -> ActionDefinition {
    ActionDefinition {
        name: "merge-automation",
        title: "Merge Day Automation",
        symbol: "${input.behavior}",
        description: "Merge repository branches.",
        permission: "merge-automation",
        order: 500,
        context: Vec::new(),
        schema: json!({
            "type": "object",
            "properties": {
                "force-dry-run": {
                    "type": "boolean",
                    "description": "Override other options and do not push changes",
                    // the handler maps an omitted field to false instead
                    "default": true,
                },
                "behavior": {
                    "type": "string",
                    "description": "The type of release promotion to perform.",
                    // this enum must stay in sync with the merge-automation kind
                    "enum": ["major", "minor"],
                    "default": "major",
                },
                "merge-automation-id": {
                    "type": "integer",
                    "description": "Shipit merge automation ID for marking as merged.",
                },
            },
            "required": ["behavior"],
        }),
    }
}

/// Handle a triggered merge-automation action.
///
/// Derives a new parameter set (merge-automation target tasks, action
/// trigger, merge config from the input) and re-enters the framework's
/// decision procedure rooted at the graph checkout. `task_id` is present
/// only for task-context actions; this action applies to the whole group.
pub async fn merge_automation(
    parameters: &Parameters,
    graph_config: &GraphConfig,
    input: MergeAutomationInput,
    task_group_id: &str,
    task_id: Option<&str>,
    decision: &dyn DecisionRunner,
) -> Result<()> {
    let merge_config = MergeConfig {
        behavior: input.behavior.unwrap_or_default(),
        // the action schema advertises a default of true; an omitted field
        // falls back to false here
        force_dry_run: input.force_dry_run.unwrap_or(false),
        merge_automation_id: input.merge_automation_id,
    };

    debug!(
        task_group_id,
        task_id,
        behavior = %merge_config.behavior,
        force_dry_run = merge_config.force_dry_run,
        "triggering merge-automation decision"
    );

    let parameters = parameters.for_merge_automation(merge_config);

    decision
        .run_decision(graph_config.root_dir(), parameters)
        .await
}
