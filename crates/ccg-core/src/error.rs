//! Core error types for ccg.
//!
//! This module provides the [`CcgError`] enum that every generator returns up
//! the call chain. Parsing code never terminates the process; the binary owns
//! the single top-level handler that prints the message and picks an exit
//! status via [`CcgError::is_input_error`].

use thiserror::Error;

/// The primary error type for ccg.
///
/// The first group of variants covers mistakes in the user's field
/// specification. They are detected synchronously while parsing and the remedy
/// is always to re-run with corrected input. The remaining variants are
/// ambient failures (I/O, configuration, an aborted prompt).
#[derive(Error, Debug)]
pub enum CcgError {
    // ── Field specification ──────────────────────────────────────────

    /// A field name is not a valid identifier.
    #[error("Field name {field} is invalid!")]
    InvalidFieldName {
        /// The offending field name.
        field: String,
    },

    /// A field token has no type part.
    #[error("you forgot to provide the type for {field}!")]
    MissingType {
        /// The field name.
        field: String,
    },

    /// A field declares a type tag that is not supported.
    #[error("{field}'s field type of {type_tag} does not exist!")]
    UnknownType {
        /// The field name.
        field: String,
        /// The lower-cased type tag as written by the user.
        type_tag: String,
    },

    /// A relation field (`fk`, `m2m`) does not name its related model.
    #[error("Please provide a model name for your {kind} field on {field}")]
    MissingRelation {
        /// The field name.
        field: String,
        /// The relation type tag.
        kind: String,
    },

    /// A relation field names its related model in an unusable form.
    #[error("{relation} is not a valid model name for the {kind} field {field}")]
    InvalidRelation {
        /// The field name.
        field: String,
        /// The relation type tag.
        kind: String,
        /// The related model as written by the user.
        relation: String,
    },

    /// The length part of a `char` field is not a number.
    #[error("Length {length} of {field} must be a positive whole number")]
    InvalidLength {
        /// The field name.
        field: String,
        /// The length as written by the user.
        length: String,
    },

    /// An attribute is not valid for the field's type.
    #[error(
        "Attribute {attribute} was not found for {type_tag} field {field} in {model}. Use it without quotations!"
    )]
    UnrecognizedAttribute {
        /// The attribute as written by the user (trimmed).
        attribute: String,
        /// The field's type tag.
        type_tag: String,
        /// The field name.
        field: String,
        /// The enclosing model name.
        model: String,
    },

    // ── Ambient ──────────────────────────────────────────────────────

    /// An interactive prompt could not be completed (e.g. end of input).
    #[error("Prompt aborted: {0}")]
    PromptAborted(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CcgError {
    /// Returns `true` for errors caused by the user's field specification.
    ///
    /// These end the run with a success exit status: the tool has done its
    /// job by explaining what to correct.
    pub const fn is_input_error(&self) -> bool {
        match self {
            Self::InvalidFieldName { .. }
            | Self::MissingType { .. }
            | Self::UnknownType { .. }
            | Self::MissingRelation { .. }
            | Self::InvalidRelation { .. }
            | Self::InvalidLength { .. }
            | Self::UnrecognizedAttribute { .. } => true,
            Self::PromptAborted(_) | Self::ConfigurationError(_) | Self::IoError(_) => false,
        }
    }

    /// Returns the process exit status the top-level handler should use.
    pub const fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            0
        } else {
            1
        }
    }
}

/// A convenience type alias for `Result<T, CcgError>`.
pub type CcgResult<T> = Result<T, CcgError>;
