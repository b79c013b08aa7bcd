use regex::Regex;
use tracing::debug;

use super::{ExtractedKeys, KeyExtractor};

/// Call forms recognized when none are configured.
pub const DEFAULT_CALL_FORMS: &[&str] = &[
    "trans",
    "trans_choice",
    "Lang::get",
    "Lang::choice",
    "Lang::trans",
    "Lang::transChoice",
    "@lang",
    "@choice",
    "__",
];

/// Regex-based key extractor.
///
/// Matches `<form>('<topic>.<key>'` followed by `,` or `)`, where `<form>` is
/// one of the configured call forms (case-insensitive) and `<topic>` may carry
/// a vendor package (`courier::mail.subject`). Either quote style is
/// accepted. This is a textual scan: it does not understand nested quotes or
/// escaped delimiters.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    pattern: Option<Regex>,
}

impl PatternExtractor {
    pub fn new<S: AsRef<str>>(call_forms: &[S]) -> Result<Self, regex::Error> {
        let forms: Vec<String> = call_forms
            .iter()
            .map(|f| f.as_ref().trim())
            .filter(|f| !f.is_empty())
            .map(regex::escape)
            .collect();

        if forms.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!(
            r#"(?i)({})\(\s*['"]((?:[A-Za-z0-9_-]+::)?[A-Za-z0-9_-]+(?:\.[^'"()$\r\n]+)+)['"]\s*[,)]"#,
            forms.join("|")
        ))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn with_default_forms() -> Self {
        // Escaped literal alternation; cannot fail to compile.
        Self::new(DEFAULT_CALL_FORMS).unwrap_or(Self { pattern: None })
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::with_default_forms()
    }
}

impl KeyExtractor for PatternExtractor {
    fn extract(&self, source: &str) -> ExtractedKeys {
        let mut found = ExtractedKeys::new();
        let Some(pattern) = &self.pattern else {
            return found;
        };

        for captures in pattern.captures_iter(source) {
            let (Some(form), Some(reference)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            if !is_call_boundary(&source[..form.start()]) {
                continue;
            }

            // Topic is the first segment; the rest is the key path, dots and all.
            let Some((topic, subkey)) = reference.as_str().split_once('.') else {
                debug!(reference = reference.as_str(), "skipping malformed key reference");
                continue;
            };
            found
                .entry(topic.to_string())
                .or_default()
                .insert(subkey.to_string());
        }

        found
    }
}

/// A call form must not continue an identifier or follow `->`.
fn is_call_boundary(before: &str) -> bool {
    if before.ends_with("->") {
        return false;
    }
    match before.chars().next_back() {
        Some(c) => !(c.is_alphanumeric() || c == '_'),
        None => true,
    }
}
