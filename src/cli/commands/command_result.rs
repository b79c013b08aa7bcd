use indexmap::IndexMap;

use crate::core::catalog::{FindMatch, SyncPlan};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Show(ShowSummary),
    Find(FindSummary),
    Trans(TransSummary),
    Remove(RemoveSummary),
    Rename(RenameSummary),
    Sync(SyncSummary),
    Missing,
    Init(InitSummary),
}

/// One row of the `show` table: a key and its value per displayed language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRow {
    pub key: String,
    /// Aligned with `ShowSummary::languages`; `None` when absent.
    pub values: Vec<Option<String>>,
}

#[derive(Debug)]
pub struct ShowSummary {
    pub topic: String,
    pub languages: Vec<String>,
    pub rows: Vec<ShowRow>,
}

#[derive(Debug)]
pub struct FindSummary {
    pub keyword: String,
    pub languages: Vec<String>,
    pub matches: Vec<FindMatch>,
}

#[derive(Debug)]
pub struct TransSummary {
    pub reference: String,
    /// Language -> value written.
    pub values: IndexMap<String, String>,
}

#[derive(Debug)]
pub struct RemoveSummary {
    pub reference: String,
    /// Languages whose document holds (or held) the key.
    pub languages: Vec<String>,
    /// Languages with no document for the topic (dry run only).
    pub missing_documents: Vec<String>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct RenameSummary {
    pub from: String,
    pub to: String,
    pub languages: Vec<String>,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub plan: SyncPlan,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running langsync commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for commands that only report work to do).
    pub exit_on_errors: bool,
    /// Issues found by `missing`. Empty for other commands.
    pub issues: Vec<Issue>,
    /// Number of translation documents that were checked.
    pub documents_checked: usize,
}
