//! Structured rendering of field declarations and the model class.

use std::fmt::{self, Write as _};

use colored::Colorize;

use super::attributes::AttributeMap;

/// Indentation applied to every line inside the class body.
pub const INDENT: &str = "  ";

/// One field declaration line, optionally preceded by comment lines.
///
/// Renders as `name = constructor(positional..., key=value, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// The field name on the left-hand side.
    pub name: String,
    /// The field constructor, e.g. `fields.CharField`.
    pub constructor: &'static str,
    /// Positional arguments, already serialized.
    pub positional: Vec<String>,
    /// Keyword arguments, already serialized.
    pub attributes: AttributeMap,
    /// Comment lines emitted above the declaration, without the `# ` prefix.
    pub comments: Vec<String>,
}

impl FieldDeclaration {
    /// Creates a declaration with no arguments.
    pub fn new(name: impl Into<String>, constructor: &'static str) -> Self {
        Self {
            name: name.into(),
            constructor,
            positional: Vec::new(),
            attributes: AttributeMap::new(),
            comments: Vec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn positional(mut self, arg: impl Into<String>) -> Self {
        self.positional.push(arg.into());
        self
    }

    /// Replaces the keyword arguments.
    #[must_use]
    pub fn attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = attributes;
        self
    }

    /// Appends a comment line.
    #[must_use]
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    /// Returns the comma-separated argument list.
    pub fn arguments(&self) -> String {
        let mut args = self.positional.join(", ");
        if !self.attributes.is_empty() {
            if !args.is_empty() {
                args.push_str(", ");
            }
            let _ = write!(args, "{}", self.attributes);
        }
        args
    }
}

/// Renders the unindented declaration, comments first.
impl fmt::Display for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for comment in &self.comments {
            writeln!(f, "# {comment}")?;
        }
        write!(f, "{} = {}({})", self.name, self.constructor, self.arguments())
    }
}

/// Trims `text` and left-pads each of its lines with [`INDENT`], terminating
/// every line with a newline.
///
/// # Examples
///
/// ```
/// use ccg_cli::generators::tortoise_model::template::indent_lines;
///
/// assert_eq!(indent_lines("a\nb\n"), "  a\n  b\n");
/// ```
pub fn indent_lines(text: &str) -> String {
    text.trim()
        .lines()
        .fold(String::new(), |mut out, line| {
            let _ = writeln!(out, "{INDENT}{line}");
            out
        })
}

/// Renders the indented block for all declarations, in order.
pub fn render_field_block(declarations: &[FieldDeclaration]) -> String {
    declarations
        .iter()
        .map(|decl| indent_lines(&decl.to_string()))
        .collect()
}

/// The three sections of a rendered model, kept apart so each can be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModel {
    /// Import statements.
    pub imports: String,
    /// The model class.
    pub class: String,
    /// The pydantic schema declarations.
    pub schemas: String,
}

impl RenderedModel {
    /// Joins the sections without styling.
    pub fn plain(&self) -> String {
        format!("{}{}{}", self.imports, self.class, self.schemas)
    }

    /// Joins the sections with terminal colors.
    pub fn colored(&self) -> String {
        format!(
            "{}{}{}",
            self.imports.yellow(),
            self.class.blue(),
            self.schemas.green()
        )
    }
}

/// A complete Tortoise model: class, timestamps, `__str__`, and schemas.
///
/// `id`, `created_at`, and `updated_at` are always emitted around the user's
/// declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTemplate {
    model_name: String,
    declarations: Vec<FieldDeclaration>,
    str_field: String,
}

impl ModelTemplate {
    /// Creates a template for `model_name` whose `__str__` returns `str_field`.
    pub fn new(
        model_name: impl Into<String>,
        declarations: Vec<FieldDeclaration>,
        str_field: impl Into<String>,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            declarations,
            str_field: str_field.into(),
        }
    }

    /// Renders the model into its sections.
    pub fn render_sections(&self) -> RenderedModel {
        let model = &self.model_name;
        let fields = render_field_block(&self.declarations);

        let imports = "\nfrom tortoise import models, fields\n\
                       from tortoise.contrib.pydantic import pydantic_model_creator\n"
            .to_string();

        let mut class = String::new();
        let _ = writeln!(class);
        let _ = writeln!(class, "class {model}(models.Model):");
        let _ = writeln!(class, "{INDENT}id = fields.IntField(pk=True)");
        class.push_str(&fields);
        let _ = writeln!(class);
        let _ = writeln!(class, "{INDENT}created_at = fields.DatetimeField(auto_now_add=True)");
        let _ = writeln!(class, "{INDENT}updated_at = fields.DatetimeField(auto_now=True)");
        let _ = writeln!(class);
        let _ = writeln!(class, "{INDENT}def __str__(self):");
        let _ = writeln!(class, "{INDENT}{INDENT}return self.{}", self.str_field);

        let mut schemas = String::new();
        let _ = writeln!(schemas);
        let _ = writeln!(
            schemas,
            "{model}_Pydantic = pydantic_model_creator({model}, name='{model}')"
        );
        let _ = writeln!(
            schemas,
            "{model}In_Pydantic = pydantic_model_creator({model}, name='{model}In', exclude_readonly=True)"
        );

        RenderedModel {
            imports,
            class,
            schemas,
        }
    }

    /// Renders the model as plain text.
    pub fn render(&self) -> String {
        self.render_sections().plain()
    }
}
