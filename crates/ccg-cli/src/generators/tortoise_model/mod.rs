//! The `tortoise_model` generator.
//!
//! Prompts for a model name and a field spec, then emits a Tortoise ORM model
//! class with `id`, `created_at`, `updated_at`, a `__str__` method, and two
//! pydantic schema declarations.
//!
//! ## Field spec syntax
//!
//! Fields are separated by whitespace; the parts of a field by `:`.
//!
//! | Type | Form | Example |
//! |---|---|---|
//! | `int` | `name:int[:attrs]` | `pages:int:default=0` |
//! | `float` | `name:float[:attrs]` | `rating:float:null` |
//! | `decimal` | `name:decimal[:attrs]` | `price:decimal:default=9.99` |
//! | `char` | `name:char[:length[:attrs]]` | `title:char:100:unique` |
//! | `text` | `name:text[:attrs]` | `summary:text:null` |
//! | `bool` | `name:bool[:attrs]` | `published:bool:default=False` |
//! | `datetime` | `name:datetime[:attrs]` | `read_at:datetime:auto_now` |
//! | `fk` | `name:fk:Model[:attrs]` | `author:fk:library.Author` |
//! | `m2m` | `name:m2m:Model[:attrs]` | `tags:m2m:Tag` |
//!
//! Attributes are comma-separated: `null`, `unique`, `default=<value>` where
//! the type allows a default, and `auto_now`/`auto_now_add` on `datetime`.

pub mod attributes;
pub mod handlers;
pub mod kind;
pub mod parser;
pub mod template;

pub use attributes::{Attribute, AttributeMap, AttributeRules, DefaultRule};
pub use handlers::{FieldType, Relation};
pub use kind::FieldKind;
pub use parser::{parse_field_spec, FieldToken, ParsedField, ParsedSpec};
pub use template::{FieldDeclaration, ModelTemplate};

use ccg_core::utils::text::is_single_word;
use ccg_core::CcgResult;

use crate::generator::Generator;
use crate::prompt::Prompter;

/// Shown before the first prompt.
pub const BANNER: &str = "\nFields such as ID, created_at, updated_at are auto generated.\n";

/// Shown once the model has been generated.
pub const SUCCESS_MESSAGE: &str = "✨ Successfully Generated:";

/// Generates Tortoise ORM models from a compact field spec.
#[derive(Debug, Clone, Copy, Default)]
pub struct TortoiseModelGenerator {
    color: bool,
}

impl TortoiseModelGenerator {
    /// Creates the generator; `color` selects terminal-colored output.
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Builds the model template from already-collected answers, asking
    /// `prompter` only for the `__str__` field.
    pub fn build(
        model_name: &str,
        spec: &str,
        prompter: &mut dyn Prompter,
    ) -> CcgResult<ModelTemplate> {
        let parsed = parse_field_spec(model_name, spec)?;
        tracing::debug!(fields = parsed.field_names.len(), "field spec parsed");

        let str_field = prompter.select(
            "Choose the field to be used in __str__ method",
            &parsed.field_names,
        )?;

        Ok(ModelTemplate::new(model_name, parsed.declarations, str_field))
    }
}

impl Generator for TortoiseModelGenerator {
    fn name(&self) -> &'static str {
        "tortoise_model"
    }

    fn help(&self) -> &'static str {
        "Generate tortoise orm models."
    }

    fn generate(&self, prompter: &mut dyn Prompter) -> CcgResult<String> {
        prompter.notice(BANNER)?;

        let model_name = prompter.text("Enter your model name", &is_single_word)?;
        let spec = prompter.text("Enter the model gen commands", &|s| !s.trim().is_empty())?;

        let template = Self::build(model_name.trim(), spec.trim(), prompter)?;

        prompter.notice(SUCCESS_MESSAGE)?;
        let sections = template.render_sections();
        Ok(if self.color {
            sections.colored()
        } else {
            sections.plain()
        })
    }
}
