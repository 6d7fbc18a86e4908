use super::args::{Cli, Commands};
use super::handlers;
use super::logging;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tcxsplit_runtime::Config;

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = Config::load(path.map(PathBuf::as_path));
    match path {
        Some(path) => config.with_context(|| format!("loading config {}", path.display())),
        None => config.context("loading default config"),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Split {
            input,
            gap_threshold,
            output_dir,
            dry_run,
        } => {
            let config = config.with_overrides(gap_threshold, output_dir)?;
            handlers::split::handle(&input, &config, dry_run, cli.format)
        }

        Commands::Inspect {
            input,
            gap_threshold,
        } => {
            let config = config.with_overrides(gap_threshold, None)?;
            handlers::inspect::handle(&input, &config, cli.format)
        }
    }
}
