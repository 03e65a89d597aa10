use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;

/// A read-only source of environment variables.
///
/// The loader reads the process environment through [`ProcessEnv`] by default.
/// Maps implement this trait too, so tests can pass synthetic data instead of
/// mutating the real environment.
pub trait EnvSource: Send + Sync {
    /// Look up `name` case-sensitively. `None` means the variable is unset.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        decode(std::env::var_os(name))
    }
}

/// Invalid UTF-8 is replaced with U+FFFD rather than hiding the variable.
fn decode(value: Option<OsString>) -> Option<String> {
    value.map(|v| v.to_string_lossy().into_owned())
}

/// An environment with no variables at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnv;

impl EnvSource for EmptyEnv {
    fn lookup(&self, _name: &str) -> Option<String> {
        None
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Build an in-memory environment from `(name, value)` pairs.
pub fn env_from_pairs<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> HashMap<String, String>
where
    K: Into<String>,
    V: Into<String>,
{
    vars.into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
