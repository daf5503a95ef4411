use std::env;

use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    config::load_config,
    core::{FileError, FileKind, SourceFile, extract_file},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let kind = match cmd.kind {
        Some(kind) => kind,
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            let config = load_config(&cwd)?.config;
            FileKind::from_path(
                &cmd.file,
                &config.script_extensions,
                &config.template_extensions,
            )
            .unwrap_or_default()
        }
    };

    let file = SourceFile {
        path: cmd.file.to_string_lossy().into_owned(),
        kind,
    };
    let outcome = extract_file(&file);

    // An unreadable file is a usage problem, not a parse failure.
    if let Err(FileError::Read(reason)) = &outcome.result {
        anyhow::bail!("Cannot read {}: {}", file.path, reason);
    }

    Ok(CommandResult {
        files_checked: 1,
        parse_error_count: usize::from(!outcome.is_ok()),
        format: cmd.common.format,
        summary: CommandSummary::Extract(ExtractSummary { outcome }),
    })
}
