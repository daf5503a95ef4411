//! Report formatting and printing utilities.
//!
//! Text output lists each file's references followed by cargo-style parse
//! errors. JSON output serializes the same data for tooling.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, ScanSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Dependencies, ExtractError, FileError, FileKind, FileOutcome, FileReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(result, verbose, &mut io::stdout().lock())
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) -> Result<()> {
    match result.format {
        OutputFormat::Text => {
            print_text(result, verbose, writer);
            Ok(())
        }
        OutputFormat::Json => print_json(result, writer),
    }
}

// ============================================================
// Text
// ============================================================

fn print_text<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, verbose, writer),
        CommandSummary::Extract(summary) => print_extract(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_scan<W: Write>(summary: &ScanSummary, verbose: bool, writer: &mut W) {
    for outcome in &summary.outcomes {
        if let Ok(deps) = &outcome.result
            && (verbose || !deps.is_empty())
        {
            print_dependencies(&outcome.path, deps, writer);
        }
    }

    let failures: Vec<&FileOutcome> = summary.outcomes.iter().filter(|o| !o.is_ok()).collect();
    for outcome in &failures {
        print_failure(outcome, writer);
    }

    if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            summary.skipped_count
        );
    }

    let file_count = summary.outcomes.len();
    if failures.is_empty() {
        let reference_count: usize = summary
            .outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(reference_count)
            .sum();
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} {} in {} - {} {} found",
                file_count,
                plural(file_count, "file", "files"),
                summary.source_root.display(),
                reference_count,
                plural(reference_count, "reference", "references")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} {} of {} {} could not be parsed",
            FAILURE_MARK.red(),
            failures.len(),
            file_count,
            plural(file_count, "file", "files")
        );
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let outcome = &summary.outcome;
    match &outcome.result {
        Ok(deps) => {
            print_dependencies(&outcome.path, deps, writer);
            let count = reference_count(deps);
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "{} {} found in {}",
                    count,
                    plural(count, "reference", "references"),
                    outcome.path
                )
                .green()
            );
        }
        Err(_) => {
            print_failure(outcome, writer);
            let _ = writeln!(
                writer,
                "\n{} {} could not be parsed",
                FAILURE_MARK.red(),
                outcome.path
            );
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// Ordered names first, then names only known from lookups such as
/// `controllerFor`.
fn print_dependencies<W: Write>(path: &str, deps: &Dependencies, writer: &mut W) {
    let _ = writeln!(writer, "{}", path.bold());
    for name in deps.ordered_names() {
        let _ = writeln!(writer, "  {}", name);
    }
    for name in lookup_only_names(deps) {
        let _ = writeln!(writer, "  {} {}", name, "(lookup)".dimmed());
    }
}

fn print_failure<W: Write>(outcome: &FileOutcome, writer: &mut W) {
    let Err(err) = &outcome.result else {
        return;
    };

    let (message, position) = match err {
        FileError::Extract(ExtractError::Syntax {
            kind,
            line,
            column,
            message,
        }) => (
            format!("{} syntax error: {}", kind, message),
            Some((*line, *column)),
        ),
        other => (other.to_string(), None),
    };

    let _ = writeln!(writer, "{}: {}", "error".bold().red(), message);

    let Some((line, col)) = position else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), outcome.path);
        return;
    };
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        outcome.path,
        line,
        col
    );

    if let Some(source_line) = &outcome.source_line {
        let width = line.to_string().len();
        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            "^".red(),
            width = width,
            padding = caret_padding
        );
    }
}

fn lookup_only_names(deps: &Dependencies) -> Vec<&String> {
    [&deps.controllers, &deps.templates, &deps.views]
        .into_iter()
        .flat_map(|names| names.values())
        .filter(|full| !deps.ordered_names().contains(full))
        .collect()
}

/// Number of distinct references across the three namespaces.
fn reference_count(deps: &Dependencies) -> usize {
    deps.controllers.len() + deps.templates.len() + deps.views.len()
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// JSON
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorReport<'a> {
    path: &'a str,
    kind: FileKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
}

#[derive(Serialize)]
struct ScanReport<'a> {
    files: Vec<FileReport<'a>>,
    errors: Vec<ErrorReport<'a>>,
}

fn error_report<'a>(outcome: &'a FileOutcome, err: &FileError) -> ErrorReport<'a> {
    let (message, line, column) = match err {
        FileError::Extract(ExtractError::Syntax {
            line,
            column,
            message,
            ..
        }) => (message.clone(), Some(*line), Some(*column)),
        other => (other.to_string(), None, None),
    };
    ErrorReport {
        path: &outcome.path,
        kind: outcome.kind,
        message,
        line,
        column,
    }
}

fn scan_report(outcomes: &[FileOutcome]) -> ScanReport<'_> {
    let mut report = ScanReport {
        files: Vec::new(),
        errors: Vec::new(),
    };
    for outcome in outcomes {
        match &outcome.result {
            Ok(deps) => report.files.push(FileReport {
                path: &outcome.path,
                kind: outcome.kind,
                dependencies: deps,
            }),
            Err(err) => report.errors.push(error_report(outcome, err)),
        }
    }
    report
}

fn print_json<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    let json = match &result.summary {
        CommandSummary::Scan(summary) => {
            serde_json::to_string_pretty(&scan_report(&summary.outcomes))
        }
        CommandSummary::Extract(summary) => {
            let outcome = &summary.outcome;
            match &outcome.result {
                Ok(deps) => serde_json::to_string_pretty(&FileReport {
                    path: &outcome.path,
                    kind: outcome.kind,
                    dependencies: deps,
                }),
                Err(err) => serde_json::to_string_pretty(&error_report(outcome, err)),
            }
        }
        CommandSummary::Init(summary) => {
            print_init(summary, writer);
            return Ok(());
        }
    }
    .context("Failed to serialize report")?;

    writeln!(writer, "{}", json).context("Failed to write report")?;
    Ok(())
}

// ============================================================
// Tests
// ============================================================
