use crate::output::{self, ReportKind};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;
use tcxsplit_runtime::{Config, split_file};

pub fn handle(input: &Path, config: &Config, dry_run: bool, format: OutputFormat) -> Result<()> {
    let report = split_file(input, config, dry_run)
        .with_context(|| format!("splitting {}", input.display()))?;
    let kind = if dry_run { ReportKind::DryRun } else { ReportKind::Split };
    output::print_report(&report, format, kind)
}
