//! Parallel extraction over many files.
//!
//! Each file gets its own [`Extraction`]; nothing is shared between files, so
//! reading and parsing both run on the rayon pool. A failing file is reported
//! in its outcome and never stops the rest of the batch.

use std::fs;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use super::{
    dependencies::Dependencies, error::ExtractError, file_kind::FileKind, scanner::SourceFile,
    session::Extraction,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("Failed to read file: {0}")]
    Read(String),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Extraction result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: String,
    pub kind: FileKind,
    pub result: Result<Dependencies, FileError>,
    /// Text of the line a syntax error points at.
    pub source_line: Option<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Serialized shape of a successful outcome.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport<'a> {
    pub path: &'a str,
    pub kind: FileKind,
    #[serde(flatten)]
    pub dependencies: &'a Dependencies,
}

/// Read and extract every file in parallel. Outcomes keep the input order.
pub fn extract_files(files: &[SourceFile]) -> Vec<FileOutcome> {
    files.par_iter().map(extract_file).collect()
}

/// Read and extract a single file.
pub fn extract_file(file: &SourceFile) -> FileOutcome {
    let code = match fs::read_to_string(&file.path) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(path = %file.path, error = %e, "cannot read file");
            return FileOutcome {
                path: file.path.clone(),
                kind: file.kind,
                result: Err(FileError::Read(e.to_string())),
                source_line: None,
            };
        }
    };

    let result = Extraction::parse_file(&code, file.kind, Some(&file.path))
        .map(Extraction::into_dependencies)
        .map_err(FileError::from);

    let source_line = match &result {
        Err(FileError::Extract(ExtractError::Syntax { line, .. })) => {
            code.lines().nth(line.saturating_sub(1)).map(str::to_string)
        }
        _ => None,
    };
    if let Err(err) = &result {
        tracing::debug!(path = %file.path, error = %err, "extraction failed");
    }

    FileOutcome {
        path: file.path.clone(),
        kind: file.kind,
        result,
        source_line,
    }
}
