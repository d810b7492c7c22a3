//! Merge-day release automation extension points for task-graph pipelines
//!
//! This crate plugs release-branching automation into a task-graph
//! framework. It contributes:
//!
//! - the **merge-automation action** ([`actions`]): a user-triggerable entry
//!   point that re-enters graph decision-making with merge-day parameters
//! - two **task transforms** ([`transforms`]): `mark_as_merged` annotates
//!   tasks with the upstream merge-automation ID, and `version_bump` writes
//!   the release branch name and bumped version into worker payloads
//! - the typed configuration they share: run [`params`], the
//!   [`task`] description model, [`version`] parsing, and
//!   [`keyed_by`] resolution of level-conditioned fields
//!
//! Graph construction, scheduling, and the branch-merge work itself belong
//! to the host framework and its workers; this crate only prepares the
//! parameters and worker payloads they consume.

pub mod actions;
pub mod config;
pub mod decision;
pub mod error;
pub mod keyed_by;
pub mod params;
pub mod task;
pub mod transforms;
pub mod version;
