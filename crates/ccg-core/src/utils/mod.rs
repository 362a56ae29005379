//! Utility functions for ccg.
//!
//! - [`text`]: identifier checks, pluralization, and literal quoting.

pub mod text;
