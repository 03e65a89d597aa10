//! Config operations: key lookup, listing, and result types.
//!
//! Provides the logic behind `config list` and `config get`, and the
//! `ConfigResult` enum that callers use to display results.

use std::fmt;

use serde_json::Value;

use crate::error::EnvfigError;
use crate::types::ConfigTree;

/// Shown for keys whose variable was unset and had no default.
const NOT_SET: &str = "<not set>";

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A single key's resolved value.
    KeyValue { key: String, value: String },
    /// All resolved configuration key-value pairs.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Get a config value by dotted key.
pub fn get_value(tree: &ConfigTree, key: &str) -> Result<ConfigResult, EnvfigError> {
    let value = tree_get(tree, key).ok_or_else(|| EnvfigError::KeyNotFound(key.into()))?;
    Ok(ConfigResult::KeyValue {
        key: key.into(),
        value: format_value(value),
    })
}

/// List all leaf values as flattened dotted key-value pairs, in file order.
pub fn list_values(tree: &ConfigTree) -> ConfigResult {
    let mut entries = Vec::new();
    collect_entries(tree, "", &mut entries);
    ConfigResult::Listing { entries }
}

fn collect_entries(tree: &ConfigTree, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in tree {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => collect_entries(nested, &dotted, out),
            other => out.push((dotted, format_value(other))),
        }
    }
}

/// Navigate a [`ConfigTree`] by dotted key path (e.g. `"database.url"`).
pub fn tree_get<'a>(tree: &'a ConfigTree, dotted_key: &str) -> Option<&'a Value> {
    let (path, leaf) = match dotted_key.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, dotted_key),
    };

    let map = match path {
        Some(path) => {
            let mut current = tree;
            for segment in path.split('.') {
                current = current.get(segment)?.as_object()?;
            }
            current
        }
        None => tree,
    };

    map.get(leaf)
}

/// Format a value for display. Strings are shown without quotes.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => NOT_SET.to_string(),
        other => other.to_string(),
    }
}
