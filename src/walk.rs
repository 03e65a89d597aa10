//! In-place substitution over a whole [`ConfigTree`].
//!
//! Every string leaf is run through [`token::resolve`]; nested mappings are
//! walked depth-first. Arrays, numbers, booleans and nulls are left alone,
//! including any strings inside arrays.
//!
//! The walk stops at the first malformed token. Keys visited before that point
//! keep their substituted values; nothing is rolled back.

use serde_json::Value;

use crate::env::EnvSource;
use crate::error::EnvfigError;
use crate::token;
use crate::types::ConfigTree;

/// Substitute every token in `tree`, mutating it in place.
pub fn substitute(tree: &mut ConfigTree, env: &dyn EnvSource) -> Result<(), EnvfigError> {
    substitute_at(tree, "", env)
}

fn substitute_at(
    tree: &mut ConfigTree,
    prefix: &str,
    env: &dyn EnvSource,
) -> Result<(), EnvfigError> {
    for (key, value) in tree.iter_mut() {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::String(raw) => {
                let resolved = token::resolve(&dotted, raw, env).map_err(|e| {
                    EnvfigError::MalformedToken {
                        key: dotted.clone(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                if let Some(resolved) = resolved {
                    *value = resolved;
                }
            }
            Value::Object(nested) => substitute_at(nested, &dotted, env)?,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => {}
        }
    }
    Ok(())
}
