//! Action extension points
//!
//! Actions are user-triggerable entry points the framework exposes in its
//! UI/API. Each carries a JSON schema describing its input and a handler
//! that re-enters graph decision-making with modified parameters.

mod merge_automation;
mod registry;

pub use merge_automation::{
    MergeAutomationInput, merge_automation, merge_automation_definition,
};
pub use registry::{ActionDefinition, ActionRegistry};
