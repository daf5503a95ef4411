use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::ScanCommand;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    config::load_config,
    core::{extract_files, scan_files},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd)?.config;

    let source_root = cmd
        .source_root
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    let base_dir = source_root.to_string_lossy();

    let scan_result = scan_files(
        &base_dir,
        &config.includes,
        &config.ignores,
        &config.script_extensions,
        &config.template_extensions,
    );
    tracing::debug!(
        root = %base_dir,
        files = scan_result.files.len(),
        "scanning project"
    );

    let outcomes = extract_files(&scan_result.files);
    let parse_error_count = outcomes.iter().filter(|o| !o.is_ok()).count();

    Ok(CommandResult {
        files_checked: outcomes.len(),
        parse_error_count,
        format: cmd.common.format,
        summary: CommandSummary::Scan(ScanSummary {
            source_root,
            outcomes,
            skipped_count: scan_result.skipped_count,
        }),
    })
}
