//! Extraction engine.
//!
//! - `parsers`: script (swc) and template (Handlebars) parsers
//! - `extract`: node matchers and traversal drivers
//! - `dependencies`: accumulated names per file
//! - `session`: public entry point for a single file
//! - `scanner` / `batch`: file discovery and parallel extraction over a project

pub mod batch;
pub mod dependencies;
pub mod error;
pub mod extract;
pub mod file_kind;
pub mod parsers;
pub mod scanner;
pub mod session;

pub use batch::{FileError, FileOutcome, FileReport, extract_file, extract_files};
pub use dependencies::{Dependencies, NAMESPACE_SEPARATOR, NameMap, Namespace};
pub use error::ExtractError;
pub use file_kind::FileKind;
pub use scanner::{ScanResult, SourceFile, scan_files};
pub use session::Extraction;
