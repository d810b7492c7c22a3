//! Run parameters for a single graph evaluation
//!
//! The framework hands every extension point an immutable parameter set.
//! The original pipeline passed these around as loose dictionaries; here the
//! keys this crate touches are named fields validated at construction, and
//! everything else flows through untouched.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Merge-automation behavior: which component the release bumps
///
/// This is a closed set kept in sync with the merge-automation task kind.
/// Anything else is a fatal configuration error, rejected when the value is
/// parsed rather than when a transform reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// New release train: bump major, branch off the current major
    #[default]
    Major,
    /// Dot release: bump minor, branch off the current major.minor
    Minor,
}

impl FromStr for Behavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            other => Err(Error::UnknownBehavior(other.to_string())),
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// Merge-automation configuration carried in the run parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Major or minor merge-day semantics
    #[serde(default)]
    pub behavior: Behavior,
    /// Override other options and do not push changes
    #[serde(rename = "force-dry-run", default)]
    pub force_dry_run: bool,
    /// Upstream merge-automation tracking ID, used to mark the release as
    /// merged once the worker finishes
    #[serde(
        rename = "merge-automation-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub merge_automation_id: Option<u64>,
}

/// Immutable run parameters for one graph evaluation
///
/// Constructed once (by the framework, or derived by an action handler) and
/// read-only for the remainder of the run. Framework keys this crate does not
/// interpret are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Permission level of the repository (e.g. `"3"` for release branches)
    pub level: String,
    /// Git reference the graph was generated from
    pub head_ref: String,
    /// Target-task filter method selecting which tasks the run submits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tasks_method: Option<String>,
    /// What triggered the evaluation (e.g. `"action"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_for: Option<String>,
    /// Merge-day configuration, present only for merge-automation runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_config: Option<MergeConfig>,
    /// Remaining framework parameters, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Parameters {
    /// Create a minimal parameter set with the fields this crate reads
    #[must_use]
    pub fn new(level: impl Into<String>, head_ref: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            head_ref: head_ref.into(),
            target_tasks_method: None,
            tasks_for: None,
            merge_config: None,
            extra: Map::new(),
        }
    }

    /// Derive the parameter set for a merge-automation action run.
    ///
    /// Selects the merge-automation target tasks, flags the evaluation as
    /// action-triggered, and installs the merge config. All other fields are
    /// carried over unchanged.
    #[must_use]
    pub fn for_merge_automation(&self, merge_config: MergeConfig) -> Self {
        let mut derived = self.clone();
        derived.target_tasks_method = Some("merge_automation".to_string());
        derived.tasks_for = Some("action".to_string());
        derived.merge_config = Some(merge_config);
        derived
    }

    /// The configured merge-automation ID, if any
    #[must_use]
    pub fn merge_automation_id(&self) -> Option<u64> {
        self.merge_config.as_ref()?.merge_automation_id
    }

    /// The configured behavior, defaulting to major.
    ///
    /// The default keeps a full graph evaluation (outside the action, where
    /// no merge config exists) producing valid tasks.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.merge_config
            .as_ref()
            .map(|config| config.behavior)
            .unwrap_or_default()
    }
}
