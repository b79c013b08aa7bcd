//! Issue types for translation catalog checks.
//!
//! Each issue is self-contained with everything the reporter needs to display
//! it: the document it concerns, the key, and the language.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::core::catalog::{EmptyValue, MissingKey};
use crate::core::data::Topic;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    EmptyValue,
    UnreadableDocument,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::EmptyValue => write!(f, "empty-value"),
            Rule::UnreadableDocument => write!(f, "unreadable-document"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key present in another language of the topic but not in this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub topic: String,
    pub key: String,
    pub language: String,
    /// Document that should hold the key (may not exist yet).
    pub path: String,
}

impl MissingKeyIssue {
    pub fn new(topic: &Topic, missing: MissingKey) -> Self {
        Self {
            topic: topic.to_string(),
            key: missing.key,
            language: missing.language,
            path: display_path(&missing.path),
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key whose value is the empty string (typically left behind by sync).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValueIssue {
    pub topic: String,
    pub key: String,
    pub language: String,
    pub path: String,
}

impl EmptyValueIssue {
    pub fn new(topic: &Topic, empty: EmptyValue) -> Self {
        Self {
            topic: topic.to_string(),
            key: empty.key,
            language: empty.language,
            path: display_path(&empty.path),
        }
    }

    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyValue
    }
}

/// Translation document that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableDocumentIssue {
    pub path: String,
    pub error: String,
}

impl UnreadableDocumentIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnreadableDocument
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in the translation catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    EmptyValue(EmptyValueIssue),
    UnreadableDocument(UnreadableDocumentIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::EmptyValue(_) => EmptyValueIssue::severity(),
            Issue::UnreadableDocument(_) => UnreadableDocumentIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::EmptyValue(_) => EmptyValueIssue::rule(),
            Issue::UnreadableDocument(_) => UnreadableDocumentIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on
/// [`Issue`] without boxing.
#[enum_dispatch]
pub trait Report {
    /// Document the issue concerns.
    fn file_path(&self) -> &str;

    /// Primary message to display (full key reference or error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn file_path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!("{}.{}", self.topic, self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in '{}'", self.language))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `langsync sync --apply` to add it with an empty value")
    }
}

impl Report for EmptyValueIssue {
    fn file_path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        format!("{}.{}", self.topic, self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("empty in '{}'", self.language))
    }
}

impl Report for UnreadableDocumentIssue {
    fn file_path(&self) -> &str {
        &self.path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
