//! # envfig demo application
//!
//! Loads a config file, substitutes `${NAME}` / `${NAME:DEFAULT}` tokens from
//! the environment, and prints the result. Exists purely to demonstrate and
//! manually verify envfig's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example envfig_demo -- demos/envfig_demo/sample.yaml config list
//! PORT=9000 cargo run --example envfig_demo -- demos/envfig_demo/sample.yaml config get server.port
//! RUST_LOG=envfig=debug cargo run --example envfig_demo -- demos/envfig_demo/sample.yaml json
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                   | How to exercise it                                            |
//! |---------------------------|---------------------------------------------------------------|
//! | Defaults                  | run `config list` with no variables set                       |
//! | Env override              | `PORT=9000 ... config get server.port`                        |
//! | Type coercion             | `DEBUG=True ... config get server.debug` prints `true`        |
//! | Missing variable warning  | leave `API_TOKEN` unset; `api.token` is `<not set>`           |
//! | Ignore the environment    | add `--no-env`                                                |
//! | Diagnostics               | `RUST_LOG=envfig=debug`                                       |

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use envfig::{ConfigArgs, Envfig};

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// envfig demo: load a config file with environment substitution.
#[derive(Parser, Debug)]
#[command(name = "envfig-demo")]
struct Cli {
    /// Config file (.json, .yml, .yaml, .ini, .cfg, .toml).
    file: PathBuf,

    /// Resolve every token to its default, ignoring the environment.
    #[arg(long, global = true)]
    no_env: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the whole substituted tree as JSON.
    Json,
    /// Inspect resolved values (list, get).
    Config(ConfigArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = Envfig::builder().path(&cli.file);
    if cli.no_env {
        builder = builder.no_env();
    }
    let loaded = builder.load().unwrap_or_else(|e| {
        eprintln!("Failed to load config:\n{e}");
        std::process::exit(1);
    });

    match cli.command {
        Commands::Json => {
            let rendered = serde_json::to_string_pretty(loaded.config()).unwrap_or_else(|e| {
                eprintln!("Failed to render config:\n{e}");
                std::process::exit(1);
            });
            println!("{rendered}");
        }
        Commands::Config(args) => {
            let action = args.into_action();
            loaded.handle_and_print(&action).unwrap_or_else(|e| {
                eprintln!("Config error:\n{e}");
                std::process::exit(1);
            });
        }
    }
}
