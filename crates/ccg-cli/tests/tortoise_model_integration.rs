//! End-to-end tests for the `tortoise_model` generator.
//!
//! These tests drive the generator through the registry with scripted
//! answers, covering:
//! 1. Field spec parsing and per-type rendering
//! 2. Validation failures and their diagnostics
//! 3. The complete generated model text

use std::io::Cursor;

use ccg_cli::generator::{GeneratorRegistry, Outcome, LIST_COMMAND, NOT_FOUND_MESSAGE};
use ccg_cli::generators::register_builtin_generators;
use ccg_cli::generators::tortoise_model::{parse_field_spec, FieldKind, FieldToken};
use ccg_cli::TerminalPrompter;
use ccg_core::{CcgError, CcgResult, Settings};

// ============================================================================
// Shared helpers
// ============================================================================

fn registry() -> GeneratorRegistry {
    let settings = Settings {
        color: false,
        ..Settings::default()
    };
    let mut registry = GeneratorRegistry::new();
    register_builtin_generators(&mut registry, &settings);
    registry
}

/// Runs `name` with `script` as stdin, returning the outcome and stdout.
fn run(name: &str, script: &str) -> (CcgResult<Outcome>, String) {
    let mut prompter = TerminalPrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut out = Vec::new();
    let result = registry().execute(name, &mut prompter, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn generate(model: &str, spec: &str, str_field: &str) -> String {
    let (result, out) = run("tortoise_model", &format!("{model}\n{spec}\n{str_field}\n"));
    assert_eq!(result.unwrap(), Outcome::Generated);
    out
}

fn generate_err(model: &str, spec: &str) -> CcgError {
    let (result, out) = run("tortoise_model", &format!("{model}\n{spec}\n1\n"));
    assert!(out.is_empty(), "no output expected, got {out:?}");
    result.unwrap_err()
}

// ============================================================================
// 1. Parsing and rendering
// ============================================================================

#[test]
fn test_declared_names_and_constructors() {
    let cases = [
        ("a:int", FieldKind::Int, "fields.IntField"),
        ("a:float", FieldKind::Float, "fields.FloatField"),
        ("a:decimal", FieldKind::Decimal, "fields.DecimalField"),
        ("a:char", FieldKind::Char, "fields.CharField"),
        ("a:text", FieldKind::Text, "fields.TextField"),
        ("a:bool", FieldKind::Bool, "fields.BooleanField"),
        ("a:datetime", FieldKind::Datetime, "fields.DatetimeField"),
        ("a:fk:Other", FieldKind::ForeignKey, "fields.ForeignKeyField"),
        ("a:m2m:Other", FieldKind::ManyToMany, "fields.ManyToManyField"),
    ];

    for (token, kind, constructor) in cases {
        assert_eq!(FieldToken::new(token).parse().unwrap().kind, kind);

        let parsed = parse_field_spec("Thing", token).unwrap();
        assert_eq!(parsed.field_names, ["a"]);
        assert_eq!(parsed.declarations[0].constructor, constructor);
        assert!(parsed.field_block().contains(&format!("a = {constructor}(")));
    }
}

#[test]
fn test_char_length_default_and_explicit() {
    let parsed = parse_field_spec("Book", "name:char").unwrap();
    assert_eq!(parsed.declarations[0].attributes.get("length"), Some("255"));

    let parsed = parse_field_spec("Book", "name:char:100").unwrap();
    assert_eq!(parsed.declarations[0].attributes.get("length"), Some("100"));
}

#[test]
fn test_int_default() {
    let parsed = parse_field_spec("Book", "pages:int:default=42").unwrap();
    assert_eq!(parsed.declarations[0].attributes.get("default"), Some("42"));

    let err = parse_field_spec("Book", "pages:int:default=abc").unwrap_err();
    assert!(matches!(err, CcgError::UnrecognizedAttribute { .. }));
}

#[test]
fn test_fk_related_name_and_comment() {
    let parsed = parse_field_spec("Book", "writer:fk:Author").unwrap();
    let decl = &parsed.declarations[0];
    assert_eq!(decl.attributes.get("related_name"), Some("\"books\""));
    assert!(decl.comments[0].contains("Author"));
    assert_eq!(decl.positional, ["\"Author\""]);
}

#[test]
fn test_m2m_through_table() {
    let parsed = parse_field_spec("Book", "authors:m2m:Author").unwrap();
    assert_eq!(
        parsed.declarations[0].attributes.get("through"),
        Some("\"book_authors\"")
    );
}

#[test]
fn test_identical_inputs_identical_output() {
    let spec = "title:char:200:unique author:fk:Author tags:m2m:Tag:null published:bool:default=True";
    let first = generate("Book", spec, "title");
    let second = generate("Book", spec, "title");
    assert_eq!(first, second);
}

// ============================================================================
// 2. Diagnostics
// ============================================================================

#[test]
fn test_invalid_field_name_diagnostic() {
    let err = generate_err("Book", "title:char 9lives:int");
    assert!(err.is_input_error());
    assert_eq!(err.to_string(), "Field name 9lives is invalid!");
}

#[test]
fn test_missing_type_diagnostic() {
    let err = generate_err("Book", "title");
    assert_eq!(err.to_string(), "you forgot to provide the type for title!");
}

#[test]
fn test_unknown_type_diagnostic() {
    let err = generate_err("Book", "title:Varchar");
    assert_eq!(err.to_string(), "title's field type of varchar does not exist!");
}

#[test]
fn test_missing_relation_diagnostic() {
    let err = generate_err("Book", "author:fk");
    assert!(matches!(err, CcgError::MissingRelation { .. }));
    assert!(err.to_string().contains("author"));
}

#[test]
fn test_invalid_relation_diagnostic() {
    let err = generate_err("Book", "tags:m2m:a.b.c");
    assert!(matches!(err, CcgError::InvalidRelation { .. }));
    assert!(err.to_string().contains("a.b.c"));
}

#[test]
fn test_unrecognized_attribute_names_field_and_model() {
    for spec in [
        "title:char:10:indexed",
        "count:int:default=1.5",
        "body:text:default=x",
        "at:datetime:default=now",
        "flag:bool:default=1",
    ] {
        let err = generate_err("Library", spec);
        let field = spec.split(':').next().unwrap();
        match &err {
            CcgError::UnrecognizedAttribute {
                field: f, model, ..
            } => {
                assert_eq!(f, field);
                assert_eq!(model, "Library");
            }
            other => panic!("{spec}: unexpected error {other}"),
        }
        assert!(err.to_string().contains("Library"));
    }
}

#[test]
fn test_trailing_empty_attribute_part_is_rejected() {
    for spec in [
        "age:int:",
        "body:text:",
        "at:datetime:",
        "a:fk:Author:",
        "n:char:10:",
    ] {
        let err = parse_field_spec("Book", spec).unwrap_err();
        match &err {
            CcgError::UnrecognizedAttribute {
                attribute, model, ..
            } => {
                assert!(attribute.is_empty(), "{spec}: {err}");
                assert_eq!(model, "Book");
            }
            other => panic!("{spec}: unexpected error {other}"),
        }
    }

    let err = generate_err("Book", "age:int:");
    assert_eq!(
        err.to_string(),
        "Attribute  was not found for int field age in Book. Use it without quotations!"
    );
}

// ============================================================================
// 3. Full output and dispatch
// ============================================================================

#[test]
fn test_full_generated_model() {
    let out = generate(
        "Book",
        "title:char:100:unique price:decimal:default=9.99 author:fk:Author tags:m2m:Tag:null",
        "1",
    );

    let expected = r#"
from tortoise import models, fields
from tortoise.contrib.pydantic import pydantic_model_creator

class Book(models.Model):
  id = fields.IntField(pk=True)
  title = fields.CharField(length=100, unique=True)
  price = fields.DecimalField(default=9.99)
  # type: fields.ForeignKeyRelation[Author]
  # type for reverse relation: fields.ReverseRelation["Book"]
  author = fields.ForeignKeyField("Author", related_name="books")
  # type: fields.ManyToManyRelation["Tag"]
  # type for reverse relation: fields.ReverseRelation["Book"]
  tags = fields.ManyToManyField("Tag", related_name="books", through="book_tags", null=True)

  created_at = fields.DatetimeField(auto_now_add=True)
  updated_at = fields.DatetimeField(auto_now=True)

  def __str__(self):
    return self.title

Book_Pydantic = pydantic_model_creator(Book, name='Book')
BookIn_Pydantic = pydantic_model_creator(Book, name='BookIn', exclude_readonly=True)

"#;
    assert_eq!(out, expected);
}

#[test]
fn test_dotted_model_name() {
    let out = generate("shop.Order", "customer:fk:shop.Customer total:decimal", "total");
    assert!(out.contains("customer = fields.ForeignKeyField(\"shop.Customer\", related_name=\"orders\")"));
    assert!(out.contains("fields.ReverseRelation[\"Order\"]"));
    assert!(out.contains("return self.total"));
}

#[test]
fn test_list_generators() {
    let (result, out) = run(LIST_COMMAND, "");
    assert_eq!(result.unwrap(), Outcome::Listed);
    assert_eq!(out, "0. tortoise_model: Generate tortoise orm models.\n");
}

#[test]
fn test_unknown_generator() {
    let (result, out) = run("django_model", "");
    assert_eq!(result.unwrap(), Outcome::NotFound);
    assert_eq!(out, format!("{NOT_FOUND_MESSAGE}\n"));
}
