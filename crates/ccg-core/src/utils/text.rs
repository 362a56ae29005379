//! String utility functions shared by the generators.

use regex::Regex;
use std::sync::OnceLock;

/// Returns `true` if `s` is a valid identifier in the generated language.
///
/// The first character must be alphabetic or `_`, the rest alphanumeric or
/// `_`. Unicode letters and digits are accepted.
///
/// # Examples
///
/// ```
/// use ccg_core::utils::text::is_identifier;
///
/// assert!(is_identifier("title"));
/// assert!(is_identifier("_private2"));
/// assert!(!is_identifier("2fast"));
/// assert!(!is_identifier("first-name"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Returns `true` if `s` names a model, either bare (`Author`) or qualified
/// with its app label (`library.Author`).
///
/// # Examples
///
/// ```
/// use ccg_core::utils::text::is_model_reference;
///
/// assert!(is_model_reference("Author"));
/// assert!(is_model_reference("library.Author"));
/// assert!(!is_model_reference("library.Author.extra"));
/// assert!(!is_model_reference("a-b"));
/// ```
pub fn is_model_reference(s: &str) -> bool {
    static DOTTED: OnceLock<Regex> = OnceLock::new();

    let dotted = DOTTED.get_or_init(|| Regex::new(r"^\w+\.?\w+$").unwrap());
    is_identifier(s) || dotted.is_match(s)
}

/// Returns `true` if `s` is a single non-empty word once surrounding
/// whitespace is removed.
///
/// # Examples
///
/// ```
/// use ccg_core::utils::text::is_single_word;
///
/// assert!(is_single_word("  Book "));
/// assert!(!is_single_word("Book Shelf"));
/// assert!(!is_single_word("   "));
/// ```
pub fn is_single_word(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && !s.contains(char::is_whitespace)
}

/// Naively pluralizes a word by appending `s` unless it already ends in one.
///
/// # Examples
///
/// ```
/// use ccg_core::utils::text::pluralize;
///
/// assert_eq!(pluralize("book"), "books");
/// assert_eq!(pluralize("news"), "news");
/// ```
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') {
        s.to_string()
    } else {
        format!("{s}s")
    }
}

/// Serializes `s` as a double-quoted, escaped string literal.
///
/// # Examples
///
/// ```
/// use ccg_core::utils::text::quote;
///
/// assert_eq!(quote("Author"), "\"Author\"");
/// assert_eq!(quote("say \"hi\""), r#""say \"hi\"""#);
/// ```
pub fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Returns the model name without its app-label prefix.
///
/// `library.Book` becomes `Book`; a bare name is returned unchanged.
///
/// # Examples
///
/// ```
/// use ccg_core::utils::text::strip_app_label;
///
/// assert_eq!(strip_app_label("library.Book"), "Book");
/// assert_eq!(strip_app_label("Book"), "Book");
/// ```
pub fn strip_app_label(model_name: &str) -> &str {
    model_name.split('.').nth(1).unwrap_or(model_name)
}
