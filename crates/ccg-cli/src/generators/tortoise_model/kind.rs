//! The closed set of field types understood by the Tortoise model generator.

use std::fmt;

/// A supported field type, identified in a field spec by its type tag.
///
/// Matching on this enum is exhaustive everywhere it dispatches, so adding a
/// variant forces every handler table to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `int` - `fields.IntField`
    Int,
    /// `float` - `fields.FloatField`
    Float,
    /// `decimal` - `fields.DecimalField`
    Decimal,
    /// `char` - `fields.CharField`
    Char,
    /// `text` - `fields.TextField`
    Text,
    /// `bool` - `fields.BooleanField`
    Bool,
    /// `datetime` - `fields.DatetimeField`
    Datetime,
    /// `fk` - `fields.ForeignKeyField`
    ForeignKey,
    /// `m2m` - `fields.ManyToManyField`
    ManyToMany,
}

impl FieldKind {
    /// Every supported kind, in the order they are documented.
    pub const ALL: [Self; 9] = [
        Self::Int,
        Self::Float,
        Self::Decimal,
        Self::Char,
        Self::Text,
        Self::Bool,
        Self::Datetime,
        Self::ForeignKey,
        Self::ManyToMany,
    ];

    /// Looks up a kind by its type tag, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccg_cli::generators::tortoise_model::FieldKind;
    ///
    /// assert_eq!(FieldKind::from_tag("FK"), Some(FieldKind::ForeignKey));
    /// assert_eq!(FieldKind::from_tag("blob"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Returns the type tag used in field specs.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Datetime => "datetime",
            Self::ForeignKey => "fk",
            Self::ManyToMany => "m2m",
        }
    }

    /// Returns the Tortoise field constructor emitted for this kind.
    pub const fn constructor(self) -> &'static str {
        match self {
            Self::Int => "fields.IntField",
            Self::Float => "fields.FloatField",
            Self::Decimal => "fields.DecimalField",
            Self::Char => "fields.CharField",
            Self::Text => "fields.TextField",
            Self::Bool => "fields.BooleanField",
            Self::Datetime => "fields.DatetimeField",
            Self::ForeignKey => "fields.ForeignKeyField",
            Self::ManyToMany => "fields.ManyToManyField",
        }
    }

    /// Returns `true` for kinds that reference another model.
    pub const fn is_relation(self) -> bool {
        matches!(self, Self::ForeignKey | Self::ManyToMany)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
