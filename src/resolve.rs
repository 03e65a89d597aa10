//! Core pipeline: parse pre-loaded file content and substitute tokens.
//!
//! Operates on pre-loaded data (`ResolveInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs and a fake environment. Steps:
//!
//! 1. Parse the content with the parser registered for its format
//! 2. Walk the tree and substitute every `${...}` token in place

use std::path::PathBuf;

use tracing::debug;

use crate::env::EnvSource;
use crate::error::EnvfigError;
use crate::file::parser_for;
use crate::types::{ConfigTree, Format};
use crate::walk;

/// All pre-loaded data needed to resolve a config. No I/O happens here.
pub struct ResolveInput {
    /// Where the content came from. Only used in errors.
    pub path: PathBuf,
    pub format: Format,
    pub content: String,
}

/// Parse `input` and substitute environment references from `env`.
pub fn resolve(input: &ResolveInput, env: &dyn EnvSource) -> Result<ConfigTree, EnvfigError> {
    let mut tree = parser_for(input.format)(&input.content, &input.path)?;
    debug!(
        path = %input.path.display(),
        format = %input.format,
        keys = tree.len(),
        "parsed config file"
    );
    walk::substitute(&mut tree, env)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EmptyEnv;
    use crate::fixtures::test::{
        SAMPLE_INI, SAMPLE_JSON, SAMPLE_TOML, SAMPLE_YAML, env_overrides,
    };
    use serde_json::{Value, json};

    fn input(format: Format, content: &str) -> ResolveInput {
        ResolveInput {
            path: format!("sample.{format}").into(),
            format,
            content: content.into(),
        }
    }

    fn assert_defaults(section: &Value, demo: &Value) {
        assert_eq!(section["system"], json!("testing"));
        assert_eq!(section["plain"], json!("value"));
        assert_eq!(section["boolean"], json!(true));
        assert_eq!(section["integer"].as_i64(), Some(1));
        assert_eq!(section["float"].as_f64(), Some(1.0));
        assert_eq!(demo["demo"], json!("default"));
    }

    fn assert_overridden(section: &Value, demo: &Value) {
        assert_eq!(section["system"], json!("env_value"));
        assert_eq!(section["plain"], json!("value"));
        assert_eq!(section["boolean"], json!(false));
        assert_eq!(section["integer"].as_i64(), Some(2));
        assert!(section["float"].is_f64());
        assert_eq!(section["float"].as_f64(), Some(2.0));
        assert_eq!(demo["demo"], json!("value"));
    }

    #[test]
    fn yaml_without_env() {
        let tree = Value::Object(resolve(&input(Format::Yaml, SAMPLE_YAML), &EmptyEnv).unwrap());
        assert_defaults(&tree, &tree["testing"]);
        assert_eq!(tree["env_val"], Value::Null);
    }

    #[test]
    fn yaml_with_env() {
        let tree =
            Value::Object(resolve(&input(Format::Yaml, SAMPLE_YAML), &env_overrides()).unwrap());
        assert_overridden(&tree, &tree["testing"]);
        assert_eq!(tree["env_val"], json!("Value"));
    }

    #[test]
    fn json_without_env() {
        let tree = Value::Object(resolve(&input(Format::Json, SAMPLE_JSON), &EmptyEnv).unwrap());
        assert_defaults(&tree, &tree["testing"]);
        assert_eq!(tree["env_val"], Value::Null);
    }

    #[test]
    fn json_with_env() {
        let tree =
            Value::Object(resolve(&input(Format::Json, SAMPLE_JSON), &env_overrides()).unwrap());
        assert_overridden(&tree, &tree["testing"]);
        assert_eq!(tree["env_val"], json!("Value"));
    }

    #[test]
    fn toml_without_env() {
        let tree = Value::Object(resolve(&input(Format::Toml, SAMPLE_TOML), &EmptyEnv).unwrap());
        assert_defaults(&tree, &tree["testing"]);
    }

    #[test]
    fn toml_with_env() {
        let tree =
            Value::Object(resolve(&input(Format::Toml, SAMPLE_TOML), &env_overrides()).unwrap());
        assert_overridden(&tree, &tree["testing"]);
    }

    #[test]
    fn ini_without_env() {
        let tree = Value::Object(resolve(&input(Format::Ini, SAMPLE_INI), &EmptyEnv).unwrap());
        assert_defaults(&tree["default"], &tree["testing"]);
    }

    #[test]
    fn ini_with_env() {
        let tree =
            Value::Object(resolve(&input(Format::Ini, SAMPLE_INI), &env_overrides()).unwrap());
        assert_overridden(&tree["default"], &tree["testing"]);
    }

    #[test]
    fn malformed_values_abort_in_every_format() {
        let cases = [
            (Format::Yaml, "system: \"${SYSTEM:testing\"\n"),
            (Format::Yaml, "system: \"SYSTEM:testing}\"\n"),
            (Format::Yaml, "system: \"${SYSTEM:testing:testing2}\"\n"),
            (Format::Json, r#"{"system": "${SYSTEM:testing"}"#),
            (Format::Json, r#"{"system": "SYSTEM:testing}"}"#),
            (Format::Json, r#"{"system": "${SYSTEM:testing:testing2}"}"#),
            (Format::Toml, "system = \"${SYSTEM:testing\"\n"),
            (Format::Toml, "system = \"SYSTEM:testing}\"\n"),
            (Format::Ini, "[default]\nsystem = ${SYSTEM:testing\n"),
            (Format::Ini, "[default]\nsystem = SYSTEM:testing}\n"),
        ];
        for (format, content) in cases {
            let result = resolve(&input(format, content), &EmptyEnv);
            assert!(
                matches!(result, Err(EnvfigError::MalformedToken { .. })),
                "{format}: {content:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_errors_surface_before_substitution() {
        let result = resolve(&input(Format::Json, "{"), &EmptyEnv);
        assert!(matches!(result, Err(EnvfigError::JsonError { .. })));
    }
}
