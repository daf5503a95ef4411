use thiserror::Error;

use super::file_kind::FileKind;

/// Failures an extraction can report to its caller.
///
/// A matcher that finds nothing is not an error; only the parser or the kind
/// selector can fail, and either failure aborts the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The text is not valid for the declared file kind.
    #[error("{kind} syntax error at {line}:{column}: {message}")]
    Syntax {
        kind: FileKind,
        line: usize,
        column: usize,
        message: String,
    },

    /// The declared kind is neither `script` nor `template`.
    #[error("Cannot parse type {0}")]
    UnsupportedFileKind(String),
}

