//! Translation-key extraction from source text.
//!
//! Extraction sits behind [`KeyExtractor`] so the regex scan in
//! [`PatternExtractor`] can be swapped for a real lexer without touching the
//! catalog.

mod pattern;

use indexmap::{IndexMap, IndexSet};

pub use pattern::{DEFAULT_CALL_FORMS, PatternExtractor};

/// Keys referenced in source, grouped by topic: `topic -> {subkey}`.
///
/// Subkeys are deduplicated and keep first-seen order.
pub type ExtractedKeys = IndexMap<String, IndexSet<String>>;

pub trait KeyExtractor: Send + Sync {
    /// Scan one source text for translation-key references.
    fn extract(&self, source: &str) -> ExtractedKeys;
}

/// Merge `other` into `into`, keeping existing order and dropping duplicates.
pub fn merge_extracted(into: &mut ExtractedKeys, other: ExtractedKeys) {
    for (topic, keys) in other {
        into.entry(topic).or_default().extend(keys);
    }
}
