//! Shared fixtures for mergeday tests
//!
//! These are test utilities - not all may be used in every test file but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use mergeday::config::GraphConfig;
use mergeday::decision::DecisionRunner;
use mergeday::error::{Error, Result};
use mergeday::params::{Behavior, MergeConfig, Parameters};
use mergeday::task::{CREATE_BRANCH_INFO, TaskDescription};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// A temporary checkout with a version file, posing as the graph root
pub struct TempCheckout {
    temp: TempDir,
}

impl TempCheckout {
    /// Create a checkout whose version file holds `version`
    pub fn with_version(version: &str) -> Self {
        let temp = TempDir::new().expect("create temp dir");
        std::fs::write(temp.path().join("version.txt"), format!("{version}\n"))
            .expect("write version file");
        Self { temp }
    }

    /// Create a checkout with no version file at all
    pub fn without_version_file() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    /// Graph configuration rooted at this checkout
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new(self.temp.path())
    }
}

/// Run parameters with a populated merge config
pub fn merge_params(
    behavior: Behavior,
    merge_automation_id: Option<u64>,
) -> Parameters {
    let mut params = Parameters::new("3", "refs/heads/main");
    params.merge_config = Some(MergeConfig {
        behavior,
        force_dry_run: false,
        merge_automation_id,
    });
    params
}

/// A task whose worker declares branch-creation intent
pub fn branch_creation_task(name: &str) -> TaskDescription {
    let mut task = TaskDescription::new(name);
    task.worker.insert(
        CREATE_BRANCH_INFO.to_string(),
        json!({"force-push": false}),
    );
    task
}

/// A task with level-conditioned scopes
pub fn scoped_task(name: &str) -> TaskDescription {
    let mut task = TaskDescription::new(name);
    task.scopes = json!({"by-level": {
        "3": ["project:releng:treescript:action:push"],
        "default": ["project:releng:treescript:action:dry-run"],
    }});
    task
}

/// Call record for `run_decision`
#[derive(Debug, Clone)]
pub struct DecisionCall {
    pub root_dir: PathBuf,
    pub parameters: Parameters,
}

/// Recording mock for the framework's decision procedure
///
/// Tracks every invocation and optionally injects a failure so error paths
/// can be exercised without a real framework.
#[derive(Default)]
pub struct MockDecisionRunner {
    calls: Mutex<Vec<DecisionCall>>,
    error: Mutex<Option<String>>,
}

impl MockDecisionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next invocation fail with the given message
    pub fn fail_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    /// Recorded invocations, in order
    pub fn calls(&self) -> Vec<DecisionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DecisionRunner for MockDecisionRunner {
    async fn run_decision(&self, root_dir: &Path, parameters: Parameters) -> Result<()> {
        self.calls.lock().unwrap().push(DecisionCall {
            root_dir: root_dir.to_path_buf(),
            parameters,
        });

        if let Some(message) = self.error.lock().unwrap().take() {
            return Err(Error::Decision(message));
        }
        Ok(())
    }
}
