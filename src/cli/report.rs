//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format; `show` and `find` print
//! aligned tables. Kept apart from the catalog so langsync can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, FindSummary, RemoveSummary, RenameSummary, ShowSummary,
    SyncSummary, TransSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Placeholder for a key absent from a language.
const MISSING_CELL: &str = "MISSING";

const COLUMN_GAP: &str = "  ";

/// Print issues in cargo-style format, followed by a problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(documents: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} translation {} - no issues found",
            documents,
            plural(documents, "file", "files")
        )
        .green()
    );
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Show(summary) => print_show(summary, writer),
        CommandSummary::Find(summary) => print_find(summary, writer),
        CommandSummary::Trans(summary) => print_trans(summary, writer),
        CommandSummary::Remove(summary) => print_remove(summary, writer),
        CommandSummary::Rename(summary) => print_rename(summary, writer),
        CommandSummary::Sync(summary) => print_sync(summary, verbose, writer),
        CommandSummary::Missing => {
            if result.issues.is_empty() {
                print_success_to(result.documents_checked, writer);
            } else {
                report_to(&result.issues, writer);
            }
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }
    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

// ============================================================
// Tables
// ============================================================

/// Left-align `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// Print rows as aligned columns. `None` cells are shown as missing.
fn print_table<W: Write>(header: &[String], rows: &[Vec<Option<String>>], writer: &mut W) {
    let mut widths: Vec<usize> = header
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let text = cell.as_deref().unwrap_or(MISSING_CELL);
            widths[i] = widths[i].max(UnicodeWidthStr::width(text));
        }
    }

    let header_line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    let _ = writeln!(writer, "{}", header_line.join(COLUMN_GAP).trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| match cell {
                Some(text) => pad(text, *w),
                None => pad(MISSING_CELL, *w).red().to_string(),
            })
            .collect();
        let _ = writeln!(writer, "{}", line.join(COLUMN_GAP).trim_end());
    }
}

fn print_show<W: Write>(summary: &ShowSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "{} has no keys", summary.topic.bold());
        return;
    }

    let mut header = vec!["key".to_string()];
    header.extend(summary.languages.iter().cloned());
    let rows: Vec<Vec<Option<String>>> = summary
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![Some(format!("{}.{}", summary.topic, row.key))];
            cells.extend(row.values.iter().cloned());
            cells
        })
        .collect();
    print_table(&header, &rows, writer);
}

fn print_find<W: Write>(summary: &FindSummary, writer: &mut W) {
    if summary.matches.is_empty() {
        let _ = writeln!(
            writer,
            "No keys or values matching \"{}\"",
            summary.keyword
        );
        return;
    }

    let mut header = vec!["key".to_string()];
    header.extend(summary.languages.iter().cloned());
    let rows: Vec<Vec<Option<String>>> = summary
        .matches
        .iter()
        .map(|m| {
            let mut cells = vec![Some(format!("{}.{}", m.topic, m.key))];
            cells.extend(
                summary
                    .languages
                    .iter()
                    .map(|language| m.values.get(language).cloned()),
            );
            cells
        })
        .collect();
    print_table(&header, &rows, writer);
}

// ============================================================
// Modifications
// ============================================================

fn print_trans<W: Write>(summary: &TransSummary, writer: &mut W) {
    let languages: Vec<&str> = summary.values.keys().map(String::as_str).collect();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Updated {} in {}", summary.reference, languages.join(", ")).green()
    );
}

fn print_remove<W: Write>(summary: &RemoveSummary, writer: &mut W) {
    if !summary.missing_documents.is_empty() {
        let _ = writeln!(
            writer,
            "{} no translation file in {} {} ({}); {} will fail there",
            "warning:".bold().yellow(),
            summary.missing_documents.len(),
            plural(summary.missing_documents.len(), "language", "languages"),
            summary.missing_documents.join(", "),
            "--apply".cyan()
        );
    }

    if summary.languages.is_empty() {
        let _ = writeln!(
            writer,
            "Key \"{}\" not found, nothing to remove.",
            summary.reference
        );
        return;
    }

    let languages = summary.languages.join(", ");
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} from {} {} ({}).",
            "Removed".green().bold(),
            summary.reference,
            summary.languages.len(),
            plural(summary.languages.len(), "file", "files"),
            languages
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} from {} {} ({}).",
            "Would remove".yellow().bold(),
            summary.reference,
            summary.languages.len(),
            plural(summary.languages.len(), "file", "files"),
            languages
        );
        let _ = writeln!(writer, "Run with {} to remove it.", "--apply".cyan());
    }
}

fn print_rename<W: Write>(summary: &RenameSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Renamed {} to {} in {}",
            summary.from,
            summary.to,
            summary.languages.join(", ")
        )
        .green()
    );
}

/// A dry run always lists the planned changes; an applied sync lists them
/// only with `verbose`.
fn print_sync<W: Write>(summary: &SyncSummary, verbose: bool, writer: &mut W) {
    let plan = &summary.plan;
    if plan.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All translation files are in sync".green()
        );
        return;
    }

    if !summary.is_apply || verbose {
        for path in &plan.created {
            let _ = writeln!(writer, "  {} {}", "create".green(), path.display());
        }
        for planned in &plan.additions {
            let _ = writeln!(
                writer,
                "  {} {}.{} ({})",
                "+".green(),
                planned.topic,
                planned.key,
                planned.language
            );
        }
    }

    let keys = plan.additions.len();
    let files = plan.created.len();
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} {}, created {} {}.",
            "Added".green().bold(),
            keys,
            plural(keys, "key", "keys"),
            files,
            plural(files, "file", "files")
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} and create {} {}.",
            "Would add".yellow().bold(),
            keys,
            plural(keys, "key", "keys"),
            files,
            plural(files, "file", "files")
        );
        let _ = writeln!(writer, "Run with {} to write them.", "--apply".cyan());
    }
}

// ============================================================
// Tests
// ============================================================
