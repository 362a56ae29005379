//! Trailing field attributes (`null`, `unique`, `default=...`, timestamp flags)
//! and the ordered map they are rendered from.

use std::fmt;
use std::sync::OnceLock;

use ccg_core::utils::text::quote;
use ccg_core::{CcgError, CcgResult};
use regex::Regex;

use super::parser::ParsedField;

/// A validated attribute of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `null` - the column accepts NULL.
    Null,
    /// `unique` - the column carries a unique constraint.
    Unique,
    /// `default=<value>`, holding the already-serialized literal.
    Default(String),
    /// `auto_now` - timestamp refreshed on every save.
    AutoNow,
    /// `auto_now_add` - timestamp set on creation.
    AutoNowAdd,
}

impl Attribute {
    /// Returns the keyword argument name this attribute renders as.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unique => "unique",
            Self::Default(_) => "default",
            Self::AutoNow => "auto_now",
            Self::AutoNowAdd => "auto_now_add",
        }
    }

    /// Returns the literal this attribute renders as.
    pub fn literal(&self) -> String {
        match self {
            Self::Default(value) => value.clone(),
            Self::Null | Self::Unique | Self::AutoNow | Self::AutoNowAdd => "True".to_string(),
        }
    }
}

/// How a `default=...` attribute is recognized and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    /// No default is accepted.
    Forbidden,
    /// A sign-optional integer, emitted as is.
    Integer,
    /// A sign-optional number with a decimal point, emitted as is.
    Decimal,
    /// A single word, emitted as a quoted string.
    Word,
    /// `True` or `False`, emitted as is.
    Boolean,
}

impl DefaultRule {
    fn pattern(self) -> Option<&'static Regex> {
        static INTEGER: OnceLock<Regex> = OnceLock::new();
        static DECIMAL: OnceLock<Regex> = OnceLock::new();
        static WORD: OnceLock<Regex> = OnceLock::new();
        static BOOLEAN: OnceLock<Regex> = OnceLock::new();

        match self {
            Self::Forbidden => None,
            Self::Integer => {
                Some(INTEGER.get_or_init(|| Regex::new(r"^default=[+-]?\d+$").unwrap()))
            }
            Self::Decimal => {
                Some(DECIMAL.get_or_init(|| Regex::new(r"^default=[+-]?\d+\.\d+$").unwrap()))
            }
            Self::Word => Some(WORD.get_or_init(|| Regex::new(r"^default=\w+$").unwrap())),
            Self::Boolean => {
                Some(BOOLEAN.get_or_init(|| Regex::new(r"^default=(True|False)$").unwrap()))
            }
        }
    }

    /// Parses `attr` as a default expression, returning the serialized literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccg_cli::generators::tortoise_model::DefaultRule;
    ///
    /// assert_eq!(DefaultRule::Integer.parse("default=-7").as_deref(), Some("-7"));
    /// assert_eq!(DefaultRule::Word.parse("default=draft").as_deref(), Some("\"draft\""));
    /// assert_eq!(DefaultRule::Integer.parse("default=abc"), None);
    /// ```
    pub fn parse(self, attr: &str) -> Option<String> {
        if !self.pattern()?.is_match(attr) {
            return None;
        }
        let (_, value) = attr.split_once('=')?;
        Some(match self {
            Self::Word => quote(value),
            _ => value.to_string(),
        })
    }
}

/// The attributes a field type accepts beyond `null` and `unique`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRules {
    /// How `default=...` is handled.
    pub default: DefaultRule,
    /// Whether `auto_now` and `auto_now_add` are accepted.
    pub timestamps: bool,
}

impl AttributeRules {
    /// Rules accepting only `null` and `unique`.
    pub const PLAIN: Self = Self::with_default(DefaultRule::Forbidden);

    /// Rules accepting `null`, `unique`, and the timestamp flags.
    pub const TIMESTAMP: Self = Self {
        default: DefaultRule::Forbidden,
        timestamps: true,
    };

    /// Rules accepting `null`, `unique`, and defaults matching `default`.
    pub const fn with_default(default: DefaultRule) -> Self {
        Self {
            default,
            timestamps: false,
        }
    }

    fn classify(self, attr: &str) -> Option<Attribute> {
        match attr.to_lowercase().as_str() {
            "null" => Some(Attribute::Null),
            "unique" => Some(Attribute::Unique),
            "auto_now" if self.timestamps => Some(Attribute::AutoNow),
            "auto_now_add" if self.timestamps => Some(Attribute::AutoNowAdd),
            _ => self.default.parse(attr).map(Attribute::Default),
        }
    }
}

/// Parses a comma-separated attribute string for `field` of `model`.
///
/// An absent part yields no attributes, while an empty one is a single empty
/// entry. Each entry is trimmed and must be recognized under `rules`; the
/// first unrecognized entry fails the whole field.
pub fn parse_attributes(
    raw: Option<&str>,
    rules: AttributeRules,
    field: &ParsedField,
    model: &str,
) -> CcgResult<Vec<Attribute>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .map(|attr| {
            rules
                .classify(attr)
                .ok_or_else(|| CcgError::UnrecognizedAttribute {
                    attribute: attr.to_string(),
                    type_tag: field.kind.tag().to_string(),
                    field: field.name.clone(),
                    model: model.to_string(),
                })
        })
        .collect()
}

/// An insertion-ordered map from keyword argument to serialized literal.
///
/// Re-inserting a key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the literal stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(key, literal)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts every attribute in order.
    pub fn extend_attributes<'a>(&mut self, attrs: impl IntoIterator<Item = &'a Attribute>) {
        for attr in attrs {
            self.insert(attr.key(), attr.literal());
        }
    }
}

/// Renders as `key=value` pairs joined by `", "`.
impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
