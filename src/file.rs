//! Reading config files and turning them into a [`ConfigTree`].
//!
//! The format is picked from the file extension (see [`Format`]) before the
//! file is opened, so an unsupported extension fails without any I/O. Each
//! format has one parser function in [`parser_for`]; every parser produces the
//! same tree shape, and nothing downstream knows which format a tree came from.
//!
//! # Format notes
//!
//! - **JSON** and **YAML**: the top level must be a mapping. An empty YAML
//!   document is an empty tree. Non-string YAML keys are stringified.
//! - **TOML**: datetimes become their RFC 3339 strings.
//! - **INI/CFG**: each section becomes a nested mapping of string values, with
//!   option names lower-cased. Properties outside any section and the
//!   `DEFAULT` section are dropped. Indented lines continue the previous
//!   value, joined with `\n`. A repeated section, or a repeated option within
//!   a section, is an error. Values are taken verbatim: no quote stripping, no
//!   escape processing.

use std::path::Path;

use ini::{Ini, ParseOption};
use serde_json::Value;

use crate::error::EnvfigError;
use crate::types::{ConfigTree, Format};

/// A parser turns file content into a tree. `path` is only used in errors.
pub type ParseFn = fn(&str, &Path) -> Result<ConfigTree, EnvfigError>;

/// Pick the parser for a format.
pub fn parser_for(format: Format) -> ParseFn {
    match format {
        Format::Json => parse_json,
        Format::Yaml => parse_yaml,
        Format::Ini => parse_ini,
        Format::Toml => parse_toml,
    }
}

/// Detect the format of `path` and read its content.
///
/// Fails with [`EnvfigError::UnsupportedFormat`] before touching the file
/// system when the extension is unknown.
pub fn read_config_file(path: &Path) -> Result<(Format, String), EnvfigError> {
    let format = Format::from_path(path).ok_or_else(|| EnvfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| EnvfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok((format, content))
}

fn not_a_mapping(path: &Path) -> EnvfigError {
    EnvfigError::NotAMapping {
        path: path.to_path_buf(),
    }
}

fn parse_json(content: &str, path: &Path) -> Result<ConfigTree, EnvfigError> {
    let value: Value = serde_json::from_str(content).map_err(|e| EnvfigError::JsonError {
        path: path.to_path_buf(),
        source: e,
    })?;
    match value {
        Value::Object(tree) => Ok(tree),
        _ => Err(not_a_mapping(path)),
    }
}

fn parse_yaml(content: &str, path: &Path) -> Result<ConfigTree, EnvfigError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| EnvfigError::YamlError {
            path: path.to_path_buf(),
            source: e,
        })?;
    match yaml_to_json(value) {
        Value::Object(tree) => Ok(tree),
        Value::Null => Ok(ConfigTree::new()),
        _ => Err(not_a_mapping(path)),
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                // NaN and infinities have no JSON form and become null.
                n.as_f64().map(Value::from).unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_json(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn parse_toml(content: &str, path: &Path) -> Result<ConfigTree, EnvfigError> {
    let table: toml::Table = toml::from_str(content).map_err(|e| EnvfigError::TomlError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml_table_to_tree(table))
}

fn toml_table_to_tree(table: toml::Table) -> ConfigTree {
    table
        .into_iter()
        .map(|(k, v)| (k, toml_to_json(v)))
        .collect()
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(toml_table_to_tree(table)),
    }
}

/// Section holding fallback options in conventional INI; not part of the tree.
const INI_DEFAULT_SECTION: &str = "DEFAULT";

fn parse_ini(content: &str, path: &Path) -> Result<ConfigTree, EnvfigError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options).map_err(|e| EnvfigError::IniError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut tree = ConfigTree::new();
    let mut seen_default = false;
    for (section, properties) in &ini {
        let Some(section) = section else {
            continue;
        };
        if section == INI_DEFAULT_SECTION {
            if seen_default {
                return Err(EnvfigError::DuplicateIniSection {
                    path: path.to_path_buf(),
                    section: section.to_string(),
                });
            }
            seen_default = true;
            continue;
        }
        if tree.contains_key(section) {
            return Err(EnvfigError::DuplicateIniSection {
                path: path.to_path_buf(),
                section: section.to_string(),
            });
        }

        let mut section_map = ConfigTree::new();
        for (key, value) in properties.iter() {
            let option = key.to_lowercase();
            if section_map.contains_key(&option) {
                return Err(EnvfigError::DuplicateIniOption {
                    path: path.to_path_buf(),
                    section: section.to_string(),
                    option,
                });
            }
            section_map.insert(option, Value::String(value.to_string()));
        }
        tree.insert(section.to_string(), Value::Object(section_map));
    }
    Ok(tree)
}
