//! ember-deps - dependency extraction for Ember applications
//!
//! Reads Ember scripts and Handlebars templates and reports the controllers,
//! templates and views they reference, as fully-qualified names such as
//! `controller:post` or `template:post/comments`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`scan`, `extract`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsers, matchers and the per-file extraction session
//!
//! ## Example
//!
//! ```
//! use ember_deps::core::{Extraction, FileKind};
//!
//! let extraction = Extraction::parse(r#"{{render "post"}}"#, FileKind::Template)?;
//! assert_eq!(extraction.ordered_names(), ["controller:post", "template:post"]);
//! # Ok::<(), ember_deps::core::ExtractError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
