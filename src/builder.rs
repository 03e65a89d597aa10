use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::env::{EmptyEnv, EnvSource, ProcessEnv};
use crate::error::EnvfigError;
use crate::file;
use crate::ops::{self, ConfigResult};
use crate::resolve::{self, ResolveInput};
use crate::types::{ConfigAction, ConfigTree, Format};

/// A loaded configuration file with every substitution applied.
///
/// Construction either fully succeeds or fails; there is no partially loaded
/// state. Once loaded, the tree is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Envfig {
    path: PathBuf,
    format: Format,
    config: ConfigTree,
}

impl Envfig {
    pub fn builder() -> EnvfigBuilder {
        EnvfigBuilder::new()
    }

    /// Load `path`, substituting from the process environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Envfig, EnvfigError> {
        Self::builder().path(path).load()
    }

    /// The substituted configuration tree.
    pub fn config(&self) -> &ConfigTree {
        &self.config
    }

    pub fn into_config(self) -> ConfigTree {
        self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Look up a value by dotted key (e.g. `"testing.demo"`).
    pub fn get(&self, key: &str) -> Result<&Value, EnvfigError> {
        ops::tree_get(&self.config, key).ok_or_else(|| EnvfigError::KeyNotFound(key.into()))
    }

    /// Deserialize the whole tree into a typed struct.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, EnvfigError> {
        serde_json::from_value(Value::Object(self.config.clone())).map_err(|e| {
            EnvfigError::InvalidValue {
                key: "<root>".into(),
                reason: e.to_string(),
            }
        })
    }

    /// Handle a `ConfigAction` and print the result to stdout.
    pub fn handle_and_print(&self, action: &ConfigAction) -> Result<(), EnvfigError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `ConfigAction` (list / get).
    pub fn handle(&self, action: &ConfigAction) -> Result<ConfigResult, EnvfigError> {
        match action {
            ConfigAction::List => Ok(ops::list_values(&self.config)),
            ConfigAction::Get { key } => ops::get_value(&self.config, key),
        }
    }
}

/// Builder for loading a config file.
///
/// The environment source defaults to the real process environment. Swap it
/// with [`env_source()`](Self::env_source) to load against a fixed set of
/// variables, or [`no_env()`](Self::no_env) to resolve every token to its
/// default.
pub struct EnvfigBuilder {
    path: Option<PathBuf>,
    env: Box<dyn EnvSource>,
}

impl EnvfigBuilder {
    fn new() -> Self {
        Self {
            path: None,
            env: Box::new(ProcessEnv),
        }
    }

    /// The config file to load. Its extension selects the format.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read variables from `env` instead of the process environment.
    pub fn env_source(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Resolve against an empty environment.
    pub fn no_env(self) -> Self {
        self.env_source(EmptyEnv)
    }

    /// Read, parse and substitute the config file.
    pub fn load(self) -> Result<Envfig, EnvfigError> {
        let path = self.path.ok_or(EnvfigError::PathRequired)?;
        let (format, content) = file::read_config_file(&path)?;
        let input = ResolveInput {
            path,
            format,
            content,
        };
        let config = resolve::resolve(&input, self.env.as_ref())?;
        debug!(path = %input.path.display(), "config loaded");

        Ok(Envfig {
            path: input.path,
            format,
            config,
        })
    }
}
