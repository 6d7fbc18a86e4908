use crate::output::{self, ReportKind};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;
use tcxsplit_runtime::{Config, inspect_file};

pub fn handle(input: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let report = inspect_file(input, config)
        .with_context(|| format!("inspecting {}", input.display()))?;
    output::print_report(&report, format, ReportKind::Inspect)
}
