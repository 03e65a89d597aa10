use std::path::PathBuf;
use thiserror::Error;

use crate::types::Format;

#[derive(Debug, Error)]
pub enum EnvfigError {
    #[error(
        "Unsupported file format for {path}: expected one of {expected}",
        expected = Format::supported_extensions()
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    JsonError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {source}")]
    YamlError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML in {path}: {source}")]
    TomlError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse INI in {path}: {source}")]
    IniError {
        path: PathBuf,
        source: ini::ParseError,
    },

    #[error("Section '{section}' appears more than once in {path}")]
    DuplicateIniSection { path: PathBuf, section: String },

    #[error("Option '{option}' appears more than once in section '{section}' of {path}")]
    DuplicateIniOption {
        path: PathBuf,
        section: String,
        option: String,
    },

    #[error("Top level of {path} is not a mapping")]
    NotAMapping { path: PathBuf },

    #[error("Malformed substitution token '{value}' at '{key}': {reason}")]
    MalformedToken {
        key: String,
        value: String,
        reason: String,
    },

    #[error("No config file given: call .path() on the builder")]
    PathRequired,

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
