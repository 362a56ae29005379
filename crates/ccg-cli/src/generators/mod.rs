//! Built-in generators.
//!
//! Each generator implements the [`Generator`](crate::generator::Generator)
//! trait.

pub mod tortoise_model;

pub use tortoise_model::TortoiseModelGenerator;

use ccg_core::Settings;

use crate::generator::GeneratorRegistry;

/// Registers all built-in generators into the given registry.
pub fn register_builtin_generators(registry: &mut GeneratorRegistry, settings: &Settings) {
    registry.register(Box::new(TortoiseModelGenerator::new(settings.color)));
}
