//! Generator framework for ccg.
//!
//! This module provides the [`Generator`] trait for defining code generators
//! and [`GeneratorRegistry`] for registering and dispatching them by name.
//!
//! ## Defining a Custom Generator
//!
//! ```rust
//! use ccg_cli::generator::{Generator, GeneratorRegistry};
//! use ccg_cli::prompt::Prompter;
//! use ccg_core::CcgResult;
//!
//! struct HelloGenerator;
//!
//! impl Generator for HelloGenerator {
//!     fn name(&self) -> &str { "hello" }
//!     fn help(&self) -> &str { "Print a greeting." }
//!
//!     fn generate(&self, _prompter: &mut dyn Prompter) -> CcgResult<String> {
//!         Ok("print('hello')".to_string())
//!     }
//! }
//!
//! let mut registry = GeneratorRegistry::new();
//! registry.register(Box::new(HelloGenerator));
//! assert_eq!(registry.list_generators(), vec!["hello"]);
//! ```

use std::collections::HashMap;
use std::io::Write;

use ccg_core::logging::generator_span;
use ccg_core::CcgResult;

use crate::prompt::Prompter;

/// The reserved name that lists the registered generators.
pub const LIST_COMMAND: &str = "list";

/// The message printed when no generator matches the requested name.
pub const NOT_FOUND_MESSAGE: &str = "Generator not found!";

/// A code generator that can be registered and invoked by name.
pub trait Generator {
    /// Returns the name of this generator (used to invoke it from the CLI).
    fn name(&self) -> &str;

    /// Returns a short help description for this generator.
    fn help(&self) -> &str;

    /// Runs the generator, asking `prompter` for any input it needs, and
    /// returns the generated text.
    fn generate(&self, prompter: &mut dyn Prompter) -> CcgResult<String>;
}

/// What a call to [`GeneratorRegistry::execute`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A generator ran and its text was written.
    Generated,
    /// The generator listing was written.
    Listed,
    /// No generator matched; the not-found message was written.
    NotFound,
}

/// A registry of generators, built once at startup and passed by reference
/// to the dispatch point.
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn Generator>>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRegistry {
    /// Creates a new empty generator registry.
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Registers a generator.
    ///
    /// If a generator with the same name already exists, it is replaced. A
    /// generator named [`LIST_COMMAND`] takes precedence over the listing.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        let name = generator.name().to_string();
        if name == LIST_COMMAND {
            tracing::warn!("generator '{LIST_COMMAND}' shadows the generator listing");
        }
        self.generators.insert(name, generator);
    }

    /// Returns a reference to the generator with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered generator names.
    pub fn list_generators(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns `true` if no generators are registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Writes the numbered generator listing, one `<idx>. <name>: <help>`
    /// line per generator.
    pub fn write_listing(&self, out: &mut dyn Write) -> CcgResult<()> {
        for (idx, name) in self.list_generators().into_iter().enumerate() {
            if let Some(generator) = self.get(name) {
                writeln!(out, "{idx}. {name}: {}", generator.help())?;
            }
        }
        Ok(())
    }

    /// Dispatches `name`: runs the matching generator and writes its text,
    /// writes the listing for [`LIST_COMMAND`], or writes
    /// [`NOT_FOUND_MESSAGE`].
    ///
    /// Generator errors are returned untouched; nothing is written for a
    /// failed run.
    pub fn execute(
        &self,
        name: &str,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> CcgResult<Outcome> {
        if let Some(generator) = self.get(name) {
            let span = generator_span(name);
            let _guard = span.enter();

            let generated = generator.generate(prompter)?;
            tracing::info!(bytes = generated.len(), "generation complete");
            writeln!(out, "{generated}")?;
            return Ok(Outcome::Generated);
        }

        if name == LIST_COMMAND {
            self.write_listing(out)?;
            return Ok(Outcome::Listed);
        }

        tracing::debug!(name, "unknown generator requested");
        writeln!(out, "{NOT_FOUND_MESSAGE}")?;
        Ok(Outcome::NotFound)
    }
}
