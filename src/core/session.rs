//! One extraction run over one file's text.
//!
//! An [`Extraction`] is built by parsing and walking the whole input in its
//! constructor. A parse failure returns the error instead, so a partially
//! populated result is never observable.

use crate::core::{
    dependencies::{Dependencies, NameMap},
    error::ExtractError,
    extract::{extract_script, extract_template},
    file_kind::FileKind,
    parsers::{parse_script_source, parse_template_source},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    kind: FileKind,
    deps: Dependencies,
}

impl Extraction {
    /// Parse `text` as `kind` and collect its dependencies.
    pub fn parse(text: &str, kind: FileKind) -> Result<Self, ExtractError> {
        Self::parse_file(text, kind, None)
    }

    /// Like [`Extraction::parse`], with the kind given by name
    /// (`"script"` or `"template"`).
    pub fn parse_named(text: &str, kind: &str) -> Result<Self, ExtractError> {
        Self::parse(text, kind.parse()?)
    }

    /// Like [`Extraction::parse`]; `file_name` is attached to script source
    /// positions.
    pub fn parse_file(
        text: &str,
        kind: FileKind,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractError> {
        let mut deps = Dependencies::new();

        match kind {
            FileKind::Script => {
                let program = parse_script_source(text, file_name)?;
                extract_script(&program, &mut deps);
            }
            FileKind::Template => {
                let template = parse_template_source(text)?;
                extract_template(&template, &mut deps);
            }
        }

        tracing::debug!(
            file = file_name.unwrap_or("<anonymous>"),
            %kind,
            names = deps.ordered_names().len(),
            "extracted dependencies"
        );

        Ok(Self { kind, deps })
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn controllers(&self) -> &NameMap {
        &self.deps.controllers
    }

    pub fn templates(&self) -> &NameMap {
        &self.deps.templates
    }

    pub fn views(&self) -> &NameMap {
        &self.deps.views
    }

    pub fn ordered_names(&self) -> &[String] {
        self.deps.ordered_names()
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.deps
    }

    pub fn into_dependencies(self) -> Dependencies {
        self.deps
    }
}
