//! Substitution tokens: `${NAME}` and `${NAME:DEFAULT}`.
//!
//! A string is a token only when it both starts with `${` and ends with `}`.
//! A string with just one of the two delimiters is rejected rather than passed
//! through, so a half-written token never silently ends up in the config.
//!
//! Resolution looks `NAME` up in an [`EnvSource`]. When the variable is unset
//! or empty and a default is present, the default is used instead. The result
//! is coerced into a typed value by parsing it as a JSON literal, so `8080`
//! becomes a number and `true`/`True` a boolean. Anything that does not parse
//! stays a string.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::env::EnvSource;

const OPEN: &str = "${";
const CLOSE: char = '}';
const SEPARATOR: char = ':';

/// Why a string was rejected as a substitution token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("missing closing '}}'")]
    Unclosed,

    #[error("missing opening '${{'")]
    Unopened,

    #[error("expected NAME or NAME:DEFAULT, found {0} ':'-separated parts")]
    PartCount(usize),

    #[error("variable name is empty")]
    EmptyName,
}

/// A parsed `${NAME}` or `${NAME:DEFAULT}` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub default: Option<String>,
}

impl Token {
    /// Parse `raw` as a token.
    ///
    /// Returns `Ok(None)` for plain strings that carry neither delimiter.
    pub fn parse(raw: &str) -> Result<Option<Token>, TokenError> {
        match (raw.starts_with(OPEN), raw.ends_with(CLOSE)) {
            (false, false) => Ok(None),
            (true, false) => Err(TokenError::Unclosed),
            (false, true) => Err(TokenError::Unopened),
            (true, true) => {
                let body = &raw[OPEN.len()..raw.len() - 1];
                let parts: Vec<&str> = body.split(SEPARATOR).collect();
                let (name, default) = match parts.as_slice() {
                    [name] => (*name, None),
                    [name, default] => (*name, Some(default.to_string())),
                    other => return Err(TokenError::PartCount(other.len())),
                };
                if name.is_empty() {
                    return Err(TokenError::EmptyName);
                }
                Ok(Some(Token {
                    name: name.to_string(),
                    default,
                }))
            }
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Resolve against `env` and coerce the result.
    ///
    /// `key` is the dotted path of the value being substituted; it only shows
    /// up in diagnostics. An unset variable without a default resolves to
    /// [`Value::Null`].
    pub fn resolve(&self, key: &str, env: &dyn EnvSource) -> Value {
        let found = env.lookup(&self.name);
        let resolved = match (found, &self.default) {
            (Some(value), _) if !value.is_empty() => value,
            // An empty variable counts as unset when a default exists.
            (_, Some(default)) => default.clone(),
            (Some(empty), None) => {
                warn!(key, variable = %self.name, "environment variable is empty");
                return Value::String(empty);
            }
            (None, None) => {
                warn!(key, variable = %self.name, "unable to find value in environment");
                return Value::Null;
            }
        };

        if resolved.is_empty() {
            return Value::String(resolved);
        }
        coerce(&resolved).into_value()
    }
}

/// Outcome of [`coerce`]: either a typed value or the string it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Typed(Value),
    Verbatim(String),
}

impl Coerced {
    pub fn into_value(self) -> Value {
        match self {
            Coerced::Typed(value) => value,
            Coerced::Verbatim(s) => Value::String(s),
        }
    }
}

/// Best-effort conversion of a resolved string into a typed value.
///
/// Surrounding whitespace is trimmed and the exact spellings `True`/`False`
/// are lower-cased before the string is parsed as a JSON literal.
pub fn coerce(raw: &str) -> Coerced {
    let normalized = match raw.trim() {
        "True" => "true",
        "False" => "false",
        other => other,
    };
    match serde_json::from_str::<Value>(normalized) {
        // An integer literal too wide for i64/u64 parses as a lossy f64.
        Ok(Value::Number(n)) if n.is_f64() && !normalized.contains(['.', 'e', 'E']) => {
            debug!(value = normalized, "integer out of range, keeping value as string");
            Coerced::Verbatim(normalized.to_string())
        }
        Ok(value) => Coerced::Typed(value),
        Err(e) => {
            debug!(value = normalized, error = %e, "keeping value as string");
            Coerced::Verbatim(normalized.to_string())
        }
    }
}

/// Substitute a single string value.
///
/// Returns `Ok(None)` when `raw` is not a token and should be left as is.
pub fn resolve(key: &str, raw: &str, env: &dyn EnvSource) -> Result<Option<Value>, TokenError> {
    Ok(Token::parse(raw)?.map(|token| token.resolve(key, env)))
}
