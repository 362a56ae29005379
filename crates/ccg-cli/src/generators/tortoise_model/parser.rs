//! Parsing of the field spec mini-language.
//!
//! A field spec is a whitespace-separated list of field tokens. Each token is
//! colon-separated: `name:type[:part...]`, for example
//! `title:char:100:null,unique` or `author:fk:library.Author`.

use ccg_core::utils::text::{is_identifier, strip_app_label};
use ccg_core::{CcgError, CcgResult};

use super::handlers;
use super::kind::FieldKind;
use super::template::{render_field_block, FieldDeclaration};

/// A single field token split into its colon-separated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToken<'a> {
    parts: Vec<&'a str>,
}

impl<'a> FieldToken<'a> {
    /// Splits `raw` on `:`.
    pub fn new(raw: &'a str) -> Self {
        Self {
            parts: raw.split(':').collect(),
        }
    }

    /// Returns the field name part.
    pub fn name(&self) -> &'a str {
        self.parts[0]
    }

    /// Returns the type tag part, if present.
    pub fn type_tag(&self) -> Option<&'a str> {
        self.parts.get(1).copied()
    }

    /// Returns the type-specific parts following the type tag.
    pub fn args(&self) -> &[&'a str] {
        self.parts.get(2..).unwrap_or_default()
    }

    /// Validates the name and type tag.
    pub fn parse(&self) -> CcgResult<ParsedField> {
        let name = self.name();
        if !is_identifier(name) {
            return Err(CcgError::InvalidFieldName {
                field: name.to_string(),
            });
        }

        let type_tag = self.type_tag().ok_or_else(|| CcgError::MissingType {
            field: name.to_string(),
        })?;

        let kind = FieldKind::from_tag(type_tag).ok_or_else(|| CcgError::UnknownType {
            field: name.to_string(),
            type_tag: type_tag.to_lowercase(),
        })?;

        Ok(ParsedField {
            name: name.to_string(),
            kind,
            args: self.args().iter().map(ToString::to_string).collect(),
        })
    }
}

/// A field whose name and type have been validated.
///
/// `args` holds the raw type-specific parts; their meaning depends on `kind`
/// and is checked by the matching handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    /// The field name.
    pub name: String,
    /// The field type.
    pub kind: FieldKind,
    /// The raw parts after the type tag.
    pub args: Vec<String>,
}

impl ParsedField {
    /// Returns the `index`-th part after the type tag.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// The result of parsing a whole field spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpec {
    /// Declared field names, in spec order.
    pub field_names: Vec<String>,
    /// One declaration per field, in spec order.
    pub declarations: Vec<FieldDeclaration>,
}

impl ParsedSpec {
    /// Renders the indented declaration block for the class body.
    pub fn field_block(&self) -> String {
        render_field_block(&self.declarations)
    }
}

/// Parses `spec` into field declarations for `model_name`.
///
/// Tokens are processed left to right and the first invalid one aborts the
/// whole parse. Relation fields see the model name without its app label.
///
/// # Examples
///
/// ```
/// use ccg_cli::generators::tortoise_model::parse_field_spec;
///
/// let parsed = parse_field_spec("Book", "title:char:100 pages:int").unwrap();
/// assert_eq!(parsed.field_names, ["title", "pages"]);
/// assert_eq!(
///     parsed.field_block(),
///     "  title = fields.CharField(length=100)\n  pages = fields.IntField()\n"
/// );
/// ```
pub fn parse_field_spec(model_name: &str, spec: &str) -> CcgResult<ParsedSpec> {
    let mut field_names = Vec::new();
    let mut declarations = Vec::new();

    for raw in spec.split_whitespace() {
        let field = FieldToken::new(raw).parse()?;
        tracing::debug!(field = %field.name, kind = %field.kind, "parsed field token");

        let model = if field.kind.is_relation() {
            strip_app_label(model_name)
        } else {
            model_name
        };
        let field_type = handlers::handle(&field, model)?;

        declarations.push(field_type.declaration(&field.name));
        field_names.push(field.name);
    }

    Ok(ParsedSpec {
        field_names,
        declarations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_parts() {
        let token = FieldToken::new("title:char:100:null");
        assert_eq!(token.name(), "title");
        assert_eq!(token.type_tag(), Some("char"));
        assert_eq!(token.args(), ["100", "null"]);

        let bare = FieldToken::new("title");
        assert_eq!(bare.type_tag(), None);
        assert!(bare.args().is_empty());
    }

    #[test]
    fn test_token_parse() {
        let field = FieldToken::new("Price:DECIMAL:default=1.50").parse().unwrap();
        assert_eq!(field.name, "Price");
        assert_eq!(field.kind, FieldKind::Decimal);
        assert_eq!(field.arg(0), Some("default=1.50"));
        assert_eq!(field.arg(1), None);
    }

    #[test]
    fn test_invalid_field_name() {
        let err = parse_field_spec("Book", "2title:char").unwrap_err();
        assert!(matches!(err, CcgError::InvalidFieldName { field } if field == "2title"));
    }

    #[test]
    fn test_missing_type() {
        let err = parse_field_spec("Book", "title").unwrap_err();
        assert!(matches!(err, CcgError::MissingType { field } if field == "title"));
    }

    #[test]
    fn test_unknown_type() {
        let err = parse_field_spec("Book", "title:String").unwrap_err();
        assert!(matches!(
            err,
            CcgError::UnknownType { field, type_tag } if field == "title" && type_tag == "string"
        ));
    }

    #[test]
    fn test_empty_type_is_unknown() {
        let err = parse_field_spec("Book", "title:").unwrap_err();
        assert!(matches!(err, CcgError::UnknownType { .. }));
    }

    #[test]
    fn test_first_error_aborts() {
        // The second token is invalid; the third would be too, but is never reached.
        let err = parse_field_spec("Book", "title:char bad-name:int pages:blob").unwrap_err();
        assert!(matches!(err, CcgError::InvalidFieldName { .. }));
    }

    #[test]
    fn test_extra_whitespace_between_tokens() {
        let parsed = parse_field_spec("Book", "  title:char \t pages:int  ").unwrap();
        assert_eq!(parsed.field_names, ["title", "pages"]);
    }

    #[test]
    fn test_empty_spec_yields_nothing() {
        let parsed = parse_field_spec("Book", "   ").unwrap();
        assert!(parsed.field_names.is_empty());
        assert_eq!(parsed.field_block(), "");
    }

    #[test]
    fn test_relation_sees_model_without_app_label() {
        let parsed = parse_field_spec("library.Book", "author:fk:Author").unwrap();
        let decl = &parsed.declarations[0];
        assert_eq!(decl.attributes.get("related_name"), Some("\"books\""));
        assert!(decl.comments[1].contains("ReverseRelation[\"Book\"]"));
    }
}
