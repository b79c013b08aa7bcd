//! Canonical rendering of [`Translations`] as a PHP array-return file.
//!
//! ```text
//! <?php
//!
//! return [
//!     'title' => 'Profile',
//!     'form' => [
//!         'submit' => 'Send',
//!     ],
//! ];
//! ```
//!
//! One entry per line, four spaces per nesting level, keys in insertion order.

use crate::core::data::{Entry, Translations};
use crate::utils::escape_single_quoted;

/// Text before the top-level array.
pub const PREAMBLE: &str = "<?php\n\nreturn ";

const INDENT: &str = "    ";

pub fn render(translations: &Translations) -> String {
    let mut out = String::from(PREAMBLE);
    render_block(translations, 1, &mut out);
    out.push_str(";\n");
    out
}

fn render_block(translations: &Translations, depth: usize, out: &mut String) {
    if translations.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push_str("[\n");
    let indent = INDENT.repeat(depth);
    for (key, entry) in translations.iter() {
        out.push_str(&indent);
        push_quoted(key, out);
        out.push_str(" => ");
        match entry {
            Entry::Leaf(value) => push_quoted(value, out),
            Entry::Node(node) => render_block(node, depth + 1, out),
        }
        out.push_str(",\n");
    }
    out.push_str(&INDENT.repeat(depth - 1));
    out.push(']');
}

fn push_quoted(text: &str, out: &mut String) {
    out.push('\'');
    out.push_str(&escape_single_quoted(text));
    out.push('\'');
}
