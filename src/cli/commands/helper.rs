use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    documents_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        documents_checked,
    }
}

/// Result for commands that report no issues.
pub fn done(summary: CommandSummary) -> CommandResult {
    finish(summary, Vec::new(), 0, false)
}
