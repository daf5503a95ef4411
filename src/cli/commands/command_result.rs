use std::path::PathBuf;

use crate::cli::args::OutputFormat;
use crate::core::FileOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub source_root: PathBuf,
    /// Sorted by path.
    pub outcomes: Vec<FileOutcome>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub outcome: FileOutcome,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running ember-deps commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub format: OutputFormat,
    /// Number of files that were read.
    pub files_checked: usize,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
}
