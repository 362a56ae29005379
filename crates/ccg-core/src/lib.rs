//! # ccg-core
//!
//! Core types, settings, logging, and error types for ccg, the common-code
//! generator. This crate has no knowledge of individual generators and
//! provides the foundation the other crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - Text helpers (identifier checks, pluralization, quoting)
//! - [`settings`] - Run settings
//! - [`settings_loader`] - Loading settings from TOML and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{CcgError, CcgResult};
pub use settings::Settings;
