//! Resolution of `by-*` conditioned values
//!
//! The framework lets task fields vary on run attributes by wrapping the
//! alternatives in a single-key object such as
//! `{"by-level": {"3": [...], "default": [...]}}`. This module collapses
//! those wrappers against the current run's context, recursing through
//! nested conditions until a concrete value remains.

use crate::error::{Error, Result};
use serde_json::Value;

/// Prefix marking a conditioned value
const BY_PREFIX: &str = "by-";

/// Key selecting the fallback alternative
const DEFAULT_KEY: &str = "default";

/// Resolve every `by-*` wrapper in `value` against `context`.
///
/// `context` maps condition names (the part after `by-`) to their current
/// values; `item_name` identifies the task in error messages. Values without
/// a `by-*` wrapper pass through unchanged. An exact key match wins over the
/// `default` alternative; a wrapper with neither is a fatal error, as is a
/// condition name missing from the context.
pub fn resolve(value: Value, item_name: &str, context: &[(&str, &str)]) -> Result<Value> {
    // A conditioned value is exactly one "by-<key>" entry
    let is_conditioned = matches!(
        &value,
        Value::Object(map) if map.len() == 1
            && map.keys().next().is_some_and(|k| k.starts_with(BY_PREFIX))
    );
    if !is_conditioned {
        return Ok(value);
    }
    let Value::Object(map) = value else {
        return Ok(value);
    };
    let Some((key, inner)) = map.into_iter().next() else {
        return Ok(Value::Object(serde_json::Map::new()));
    };
    let condition = key.trim_start_matches(BY_PREFIX);

    let Some((_, current)) = context.iter().find(|(name, _)| *name == condition) else {
        return Err(Error::KeyedBy {
            item: item_name.to_string(),
            reason: format!("no {condition:?} in resolution context"),
        });
    };

    let Value::Object(mut alternatives) = inner else {
        return Err(Error::KeyedBy {
            item: item_name.to_string(),
            reason: format!("{key} alternatives must be an object"),
        });
    };

    let chosen = alternatives
        .remove(*current)
        .or_else(|| alternatives.remove(DEFAULT_KEY))
        .ok_or_else(|| Error::KeyedBy {
            item: item_name.to_string(),
            reason: format!("no alternative for {condition}={current} and no default"),
        })?;

    // Alternatives may nest further conditions
    resolve(chosen, item_name, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_value_passes_through() {
        let scopes = json!(["project:releng:treescript:action:push"]);
        let resolved = resolve(scopes.clone(), "merge", &[("level", "3")]).unwrap();
        assert_eq!(resolved, scopes);
    }

    #[test]
    fn test_exact_match_wins_over_default() {
        let scopes = json!({"by-level": {
            "3": ["scope:level-3"],
            "default": ["scope:default"],
        }});
        let resolved = resolve(scopes, "merge", &[("level", "3")]).unwrap();
        assert_eq!(resolved, json!(["scope:level-3"]));
    }

    #[test]
    fn test_falls_back_to_default() {
        let scopes = json!({"by-level": {
            "3": ["scope:level-3"],
            "default": ["scope:default"],
        }});
        let resolved = resolve(scopes, "merge", &[("level", "1")]).unwrap();
        assert_eq!(resolved, json!(["scope:default"]));
    }

    #[test]
    fn test_nested_conditions_resolve() {
        let value = json!({"by-level": {
            "3": {"by-behavior": {"major": "push", "default": "dry-run"}},
            "default": "dry-run",
        }});
        let resolved = resolve(value, "merge", &[("level", "3"), ("behavior", "major")]).unwrap();
        assert_eq!(resolved, json!("push"));
    }

    #[test]
    fn test_missing_alternative_is_fatal() {
        let scopes = json!({"by-level": {"3": ["scope:level-3"]}});
        match resolve(scopes, "merge", &[("level", "1")]) {
            Err(Error::KeyedBy { item, .. }) => assert_eq!(item, "merge"),
            other => panic!("expected KeyedBy error, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_condition_is_fatal() {
        let scopes = json!({"by-project": {"default": []}});
        assert!(matches!(
            resolve(scopes, "merge", &[("level", "1")]),
            Err(Error::KeyedBy { .. })
        ));
    }

    #[test]
    fn test_multi_key_object_is_not_conditioned() {
        // two keys means a plain object, not a by-* wrapper
        let value = json!({"by-level": {}, "other": 1});
        let resolved = resolve(value.clone(), "merge", &[("level", "1")]).unwrap();
        assert_eq!(resolved, value);
    }
}
