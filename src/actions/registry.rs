//! Registry of action definitions
//!
//! The framework enumerates registered actions to build its UI and to route
//! triggered actions to their handlers. Definitions are metadata only; the
//! handler functions themselves are exported alongside them.

use serde_json::Value;

/// Metadata for one registered action
#[derive(Debug, Clone)]
pub struct ActionDefinition {
    /// Hook-unique action name
    pub name: &'static str,
    /// Title shown in the action UI
    pub title: &'static str,
    /// Treeherder-style symbol; may interpolate `${input.*}` fields
    pub symbol: &'static str,
    /// Longer description shown in the action UI
    pub description: &'static str,
    /// Permission required to trigger the action
    pub permission: &'static str,
    /// Sort order among registered actions (lower first)
    pub order: u32,
    /// Task-context filters; empty means the action applies to the whole
    /// task group rather than individual tasks
    pub context: Vec<Value>,
    /// JSON schema the framework validates user input against
    pub schema: Value,
}

/// Ordered collection of registered actions
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<ActionDefinition>,
}

impl ActionRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Register an action, keeping the collection sorted by `order`
    pub fn register(&mut self, definition: ActionDefinition) {
        let position = self
            .actions
            .partition_point(|existing| existing.order <= definition.order);
        self.actions.insert(position, definition);
    }

    /// Look up an action by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Iterate actions in display order
    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.actions.iter()
    }
}
