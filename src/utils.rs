//! Common utility functions shared across the codebase.

use std::borrow::Cow;

/// Escapes text for embedding in a single-quoted PHP string literal.
///
/// Backslashes and single quotes are prefixed with a backslash; nothing else
/// needs escaping inside single quotes.
///
/// # Examples
///
/// ```
/// use langsync::utils::escape_single_quoted;
///
/// assert_eq!(escape_single_quoted("O'Brien"), r"O\'Brien");
/// assert_eq!(escape_single_quoted(r"C:\lang"), r"C:\\lang");
/// assert_eq!(escape_single_quoted("plain"), "plain");
/// ```
pub fn escape_single_quoted(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| c == '\\' || c == '\'') {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c == '\\' || c == '\'' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Returns `singular` or `plural` depending on `count`.
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
