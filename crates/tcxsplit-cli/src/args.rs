use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tcxsplit")]
#[command(
    about = "Split a TCX export holding several recorded activities into one file per activity",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/tcxsplit/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Split an export at every gap and write one file per activity")]
    Split {
        /// TCX export to split
        input: PathBuf,

        /// Longest pause in seconds that still belongs to one activity
        #[arg(long)]
        gap_threshold: Option<f64>,

        /// Directory for the split files (default: current directory)
        #[arg(long, short = 'o')]
        output_dir: Option<PathBuf>,

        /// Show the planned files without writing them
        #[arg(long)]
        dry_run: bool,
    },

    #[command(about = "List the activities found in an export without writing anything")]
    Inspect {
        /// TCX export to inspect
        input: PathBuf,

        #[arg(long)]
        gap_threshold: Option<f64>,
    },
}
