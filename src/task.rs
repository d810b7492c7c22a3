//! Task descriptions flowing through the transform pipeline

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Worker key carrying branch-creation intent
pub const CREATE_BRANCH_INFO: &str = "create-branch-info";

/// One unit of work produced during graph generation
///
/// Transforms mutate the description in place and re-emit it; downstream
/// transforms and the framework's task builder consume the result. The
/// `worker` payload layout is owned by the worker implementation that
/// eventually runs the task, so it stays a plain JSON map here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescription {
    /// Task name (kind-scoped, e.g. `merge-automation-ios`)
    pub name: String,
    /// Human-readable description shown in the task UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Worker payload, interpreted by the downstream worker implementation
    #[serde(default)]
    pub worker: Map<String, Value>,
    /// Scopes the task runs with; may be `by-*` conditioned until resolved
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub scopes: Value,
    /// Remaining task fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskDescription {
    /// Create a task with an empty worker payload
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            worker: Map::new(),
            scopes: Value::Null,
            extra: Map::new(),
        }
    }

    /// Whether the worker payload declares branch-creation intent
    #[must_use]
    pub fn has_create_branch_info(&self) -> bool {
        self.worker.contains_key(CREATE_BRANCH_INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_preserves_extra_fields() {
        let task: TaskDescription = serde_json::from_value(json!({
            "name": "merge-automation-ios",
            "worker": {"implementation": "treescript"},
            "worker-type": "tree",
            "run-on-tasks-for": ["action"],
        }))
        .unwrap();

        assert_eq!(task.name, "merge-automation-ios");
        assert_eq!(task.worker["implementation"], json!("treescript"));
        assert_eq!(task.extra["worker-type"], json!("tree"));
    }

    #[test]
    fn test_has_create_branch_info() {
        let mut task = TaskDescription::new("merge");
        assert!(!task.has_create_branch_info());

        task.worker
            .insert(CREATE_BRANCH_INFO.to_string(), json!({"force-push": true}));
        assert!(task.has_create_branch_info());
    }

    #[test]
    fn test_null_scopes_not_serialized() {
        let task = TaskDescription::new("merge");
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("scopes").is_none());
    }
}
