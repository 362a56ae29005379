//! # ccg
//!
//! CCG generates common code snippets. Pick a generator by name and answer
//! its prompts; the generated text is printed to stdout.
//!
//! ```bash
//! ccg list             # show available generators
//! ccg tortoise_model   # generate a Tortoise ORM model
//! ```
//!
//! This crate holds the thin command-line layer: argument parsing, settings
//! resolution, and the single place where errors become exit statuses.

use std::io::Write;
use std::path::PathBuf;

use ccg_cli::generator::{GeneratorRegistry, Outcome};
use ccg_cli::generators::register_builtin_generators;
use ccg_cli::prompt::Prompter;
use ccg_core::{CcgError, Settings};
use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ccg", version, about = "CCG: Generate common code snippets")]
pub struct Cli {
    /// Name of the generator to be used. Use 'list' to list all generators.
    #[arg(value_name = "name")]
    pub name: String,

    /// Settings file (defaults to ./ccg.toml when present).
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

/// Builds the registry of every generator this binary ships.
pub fn build_registry(settings: &Settings) -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    register_builtin_generators(&mut registry, settings);
    registry
}

/// Runs generator `name`, writing generated text to `out` and diagnostics to
/// `err`. Returns the process exit status.
///
/// Spec errors are reported and end the run with status 0; ambient failures
/// end it with status 1.
pub fn run(
    name: &str,
    registry: &GeneratorRegistry,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    match registry.execute(name, prompter, out) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "run finished");
            if outcome == Outcome::NotFound {
                tracing::warn!(name, "no such generator");
            }
            0
        }
        Err(error) => report(&error, err),
    }
}

/// Writes `error` to `err` and returns its exit status.
pub fn report(error: &CcgError, err: &mut dyn Write) -> i32 {
    if error.is_input_error() {
        tracing::debug!(%error, "field spec rejected");
    } else {
        tracing::error!(%error, "run failed");
    }
    let _ = writeln!(err, "{error}");
    error.exit_code()
}
