//! Per-type field handlers.
//!
//! Each handler validates the type-specific parts of a [`ParsedField`] and
//! produces a [`FieldType`] carrying only validated data. Rendering a
//! `FieldType` into a [`FieldDeclaration`] cannot fail.

use ccg_core::utils::text::{is_model_reference, pluralize, quote};
use ccg_core::{CcgError, CcgResult};

use super::attributes::{parse_attributes, Attribute, AttributeMap, AttributeRules, DefaultRule};
use super::kind::FieldKind;
use super::parser::ParsedField;
use super::template::FieldDeclaration;

/// Length used for `char` fields that do not declare one.
pub const DEFAULT_CHAR_LENGTH: &str = "255";

/// The model on the other side of a relation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// The related model as written (`Author` or `library.Author`).
    pub target: String,
    /// The enclosing model, without app label.
    pub model: String,
    /// Validated trailing attributes.
    pub attrs: Vec<Attribute>,
}

/// A fully validated field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// An integer column.
    Int(Vec<Attribute>),
    /// A floating point column.
    Float(Vec<Attribute>),
    /// A fixed-point decimal column.
    Decimal(Vec<Attribute>),
    /// A bounded string column.
    Char {
        /// The maximum length, as digits.
        length: String,
        /// Validated trailing attributes.
        attrs: Vec<Attribute>,
    },
    /// An unbounded text column.
    Text(Vec<Attribute>),
    /// A boolean column.
    Bool(Vec<Attribute>),
    /// A timestamp column.
    Datetime(Vec<Attribute>),
    /// A many-to-one relation.
    ForeignKey(Relation),
    /// A many-to-many relation through a join table.
    ManyToMany(Relation),
}

impl FieldType {
    /// Returns the kind this type was parsed as.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::Float(_) => FieldKind::Float,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Char { .. } => FieldKind::Char,
            Self::Text(_) => FieldKind::Text,
            Self::Bool(_) => FieldKind::Bool,
            Self::Datetime(_) => FieldKind::Datetime,
            Self::ForeignKey(_) => FieldKind::ForeignKey,
            Self::ManyToMany(_) => FieldKind::ManyToMany,
        }
    }

    /// Builds the declaration for a field called `name`.
    pub fn declaration(&self, name: &str) -> FieldDeclaration {
        let decl = FieldDeclaration::new(name, self.kind().constructor());
        let mut map = AttributeMap::new();

        match self {
            Self::Int(attrs)
            | Self::Float(attrs)
            | Self::Decimal(attrs)
            | Self::Text(attrs)
            | Self::Bool(attrs)
            | Self::Datetime(attrs) => {
                map.extend_attributes(attrs);
                decl.attributes(map)
            }
            Self::Char { length, attrs } => {
                map.insert("length", length.as_str());
                map.extend_attributes(attrs);
                decl.attributes(map)
            }
            Self::ForeignKey(relation) => {
                map.insert("related_name", quote(&pluralize(&relation.model.to_lowercase())));
                map.extend_attributes(&relation.attrs);
                decl.positional(quote(&relation.target))
                    .attributes(map)
                    .comment(format!(
                        "type: fields.ForeignKeyRelation[{}]",
                        relation.target
                    ))
                    .comment(reverse_relation_comment(&relation.model))
            }
            Self::ManyToMany(relation) => {
                map.insert("related_name", quote(&pluralize(&relation.model.to_lowercase())));
                map.insert(
                    "through",
                    quote(&format!(
                        "{}_{}",
                        relation.model.to_lowercase(),
                        name.to_lowercase()
                    )),
                );
                map.extend_attributes(&relation.attrs);
                decl.positional(quote(&relation.target))
                    .attributes(map)
                    .comment(format!(
                        "type: fields.ManyToManyRelation[\"{}\"]",
                        relation.target
                    ))
                    .comment(reverse_relation_comment(&relation.model))
            }
        }
    }
}

fn reverse_relation_comment(model: &str) -> String {
    format!("type for reverse relation: fields.ReverseRelation[\"{model}\"]")
}

/// Dispatches `field` to the handler for its kind.
///
/// `model` is the enclosing model name as the handler should see it.
pub fn handle(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    match field.kind {
        FieldKind::Int => handle_int(field, model),
        FieldKind::Float => handle_float(field, model),
        FieldKind::Decimal => handle_decimal(field, model),
        FieldKind::Char => handle_char(field, model),
        FieldKind::Text => handle_text(field, model),
        FieldKind::Bool => handle_bool(field, model),
        FieldKind::Datetime => handle_datetime(field, model),
        FieldKind::ForeignKey => handle_fk(field, model),
        FieldKind::ManyToMany => handle_m2m(field, model),
    }
}

/// `name:int[:attrs]`
pub fn handle_int(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    let rules = AttributeRules::with_default(DefaultRule::Integer);
    parse_attributes(field.arg(0), rules, field, model).map(FieldType::Int)
}

/// `name:float[:attrs]`
pub fn handle_float(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    let rules = AttributeRules::with_default(DefaultRule::Decimal);
    parse_attributes(field.arg(0), rules, field, model).map(FieldType::Float)
}

/// `name:decimal[:attrs]`
pub fn handle_decimal(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    let rules = AttributeRules::with_default(DefaultRule::Decimal);
    parse_attributes(field.arg(0), rules, field, model).map(FieldType::Decimal)
}

/// `name:char[:length[:attrs]]`
///
/// An absent or empty length falls back to [`DEFAULT_CHAR_LENGTH`].
pub fn handle_char(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    let length = match field.arg(0) {
        None | Some("") => DEFAULT_CHAR_LENGTH.to_string(),
        Some(length) if length.bytes().all(|b| b.is_ascii_digit()) => length.to_string(),
        Some(length) => {
            return Err(CcgError::InvalidLength {
                field: field.name.clone(),
                length: length.to_string(),
            })
        }
    };

    let rules = AttributeRules::with_default(DefaultRule::Word);
    let attrs = parse_attributes(field.arg(1), rules, field, model)?;
    Ok(FieldType::Char { length, attrs })
}

/// `name:text[:attrs]`
pub fn handle_text(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    parse_attributes(field.arg(0), AttributeRules::PLAIN, field, model).map(FieldType::Text)
}

/// `name:bool[:attrs]`
pub fn handle_bool(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    let rules = AttributeRules::with_default(DefaultRule::Boolean);
    parse_attributes(field.arg(0), rules, field, model).map(FieldType::Bool)
}

/// `name:datetime[:attrs]`, where attrs may include `auto_now`/`auto_now_add`.
pub fn handle_datetime(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    parse_attributes(field.arg(0), AttributeRules::TIMESTAMP, field, model)
        .map(FieldType::Datetime)
}

/// `name:fk:Target[:attrs]`
pub fn handle_fk(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    relation(field, model).map(FieldType::ForeignKey)
}

/// `name:m2m:Target[:attrs]`
pub fn handle_m2m(field: &ParsedField, model: &str) -> CcgResult<FieldType> {
    relation(field, model).map(FieldType::ManyToMany)
}

fn relation(field: &ParsedField, model: &str) -> CcgResult<Relation> {
    let target = match field.arg(0) {
        None | Some("") => {
            return Err(CcgError::MissingRelation {
                field: field.name.clone(),
                kind: field.kind.tag().to_string(),
            })
        }
        Some(target) if !is_model_reference(target) => {
            return Err(CcgError::InvalidRelation {
                field: field.name.clone(),
                kind: field.kind.tag().to_string(),
                relation: target.to_string(),
            })
        }
        Some(target) => target.to_string(),
    };

    let attrs = parse_attributes(field.arg(1), AttributeRules::PLAIN, field, model)?;
    Ok(Relation {
        target,
        model: model.to_string(),
        attrs,
    })
}
