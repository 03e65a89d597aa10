//! Load a YAML, TOML, INI or JSON config file and fill in environment
//! variables referenced from its string values.
//!
//! ```ignore
//! let loaded = Envfig::load("config.yaml")?;
//! let port = loaded.get("server.port")?;
//! ```
//!
//! # Substitution tokens
//!
//! A string value that is exactly `${NAME}` or `${NAME:DEFAULT}` is replaced
//! by the value of the environment variable `NAME`:
//!
//! ```yaml
//! system: "${SYSTEM:testing}"
//! server:
//!   port: "${PORT:8080}"
//!   debug: "${DEBUG:False}"
//! token: "${API_TOKEN}"
//! ```
//!
//! | Token | Variable | Result |
//! |-------|----------|--------|
//! | `${NAME}` | set | the variable's value |
//! | `${NAME}` | unset | `null` (and a warning is logged) |
//! | `${NAME:DEFAULT}` | set, non-empty | the variable's value |
//! | `${NAME:DEFAULT}` | unset or empty | `DEFAULT` |
//!
//! The token must be the whole string: `"http://${HOST}"` is left alone. A
//! string that starts with `${` but does not end with `}` (or the other way
//! round), or a token with more than one `:`, aborts the load with
//! [`EnvfigError::MalformedToken`]. Substituted values are never scanned again,
//! so a variable holding `${OTHER}` stays literal.
//!
//! Note that an empty variable is treated as unset when a default exists.
//! There is no way to override a default with an empty string.
//!
//! # Typed values
//!
//! Environment variables are always strings, but config consumers usually
//! want numbers and booleans. After lookup the value is trimmed, `True` and
//! `False` are lower-cased, and the result is parsed as a JSON literal:
//!
//! | Resolved | Becomes |
//! |----------|---------|
//! | `8080` | integer `8080` |
//! | `2.0` | float `2.0` |
//! | `False` / `false` | boolean `false` |
//! | `[1, 2]` | array |
//! | `hello` | string `"hello"` (not valid JSON, kept as is) |
//! | `123456789012345678901` | string (integer wider than 64 bits) |
//!
//! # What gets walked
//!
//! Every string value in every nested mapping. Values inside arrays, and
//! non-string leaves, are left untouched.
//!
//! # Formats
//!
//! The file extension picks the parser:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | JSON |
//! | `.yml`, `.yaml` | YAML |
//! | `.ini`, `.cfg` | INI (sections become nested mappings, `DEFAULT` is dropped) |
//! | `.toml` | TOML |
//!
//! Any other extension fails with [`EnvfigError::UnsupportedFormat`] before
//! the file is opened.
//!
//! # Testing without touching the environment
//!
//! The builder takes any [`EnvSource`]. Maps implement it, so tests can load
//! against a fixed set of variables:
//!
//! ```ignore
//! let env = env_from_pairs([("PORT", "9000")]);
//! let loaded = Envfig::builder()
//!     .path("config.yaml")
//!     .env_source(env)
//!     .load()?;
//! ```
//!
//! # Logging
//!
//! Diagnostics go through [`tracing`]: a `warn` event for every
//! `${NAME}` whose variable is missing, `debug` events for values that stay
//! strings and for load progress. Install a subscriber to see them.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`ConfigArgs`] gives an
//! application `config list|get` subcommands over the loaded file.

pub mod env;
pub mod error;
pub mod token;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod file;
mod ops;
mod resolve;
mod walk;

#[cfg(test)]
mod fixtures;

pub use builder::{Envfig, EnvfigBuilder};
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use env::{EmptyEnv, EnvSource, ProcessEnv, env_from_pairs};
pub use error::EnvfigError;
pub use file::{ParseFn, parser_for};
pub use ops::ConfigResult;
pub use resolve::{ResolveInput, resolve};
pub use types::{ConfigAction, ConfigTree, Format};
pub use walk::substitute;
