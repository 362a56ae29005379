//! # ccg-cli
//!
//! Generator framework and built-in generators for ccg.
//!
//! This crate provides:
//!
//! - **Generators** - The [`Generator`] trait and the [`GeneratorRegistry`]
//!   that dispatches a generator by name
//! - **Prompts** - The [`Prompter`] abstraction over interactive input, with a
//!   terminal implementation
//! - **Built-in generators** - `tortoise_model`, which turns a compact field
//!   spec into a Tortoise ORM model
//!
//! ## Quick Start
//!
//! ```rust
//! use ccg_cli::generator::GeneratorRegistry;
//! use ccg_cli::generators::register_builtin_generators;
//! use ccg_core::Settings;
//!
//! let mut registry = GeneratorRegistry::new();
//! register_builtin_generators(&mut registry, &Settings::default());
//!
//! assert!(registry.list_generators().contains(&"tortoise_model"));
//! ```

// These clippy lints are intentionally allowed:
// - doc_markdown: backtick requirements for documentation items are too strict
// - missing_const_for_fn: some functions may gain runtime logic later
// - module_name_repetitions: re-exports make module-prefixed names redundant
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

pub mod generator;
pub mod generators;
pub mod prompt;

// Re-export primary types at the crate root for convenience.
pub use generator::{Generator, GeneratorRegistry, Outcome};
pub use generators::TortoiseModelGenerator;
pub use prompt::{Prompter, TerminalPrompter};
