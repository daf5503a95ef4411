use std::{fmt, path::Path, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::ExtractError;

/// The two source flavours an extraction understands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Imperative script (controllers, routes, components).
    #[default]
    Script,
    /// Declarative Handlebars template.
    Template,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Script => "script",
            FileKind::Template => "template",
        }
    }

    /// Classify a path by extension against configured extension lists.
    ///
    /// Returns `None` when the extension belongs to neither list.
    pub fn from_path(
        path: &Path,
        script_extensions: &[String],
        template_extensions: &[String],
    ) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if template_extensions.iter().any(|e| e == ext) {
            Some(FileKind::Template)
        } else if script_extensions.iter().any(|e| e == ext) {
            Some(FileKind::Script)
        } else {
            None
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" => Ok(FileKind::Script),
            "template" => Ok(FileKind::Template),
            other => Err(ExtractError::UnsupportedFileKind(other.to_string())),
        }
    }
}
