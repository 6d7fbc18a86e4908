use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tcxsplit_engine::{SessionSummary, split_activities, summarize_sessions};
use tcxsplit_types::{Session, TimePattern};

use crate::config::Config;
use crate::naming::plan_paths;
use crate::writer::write_all;
use crate::{Error, Result};

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    #[serde(flatten)]
    pub summary: SessionSummary,
    /// Output file; unset when the input holds a single activity or when
    /// only inspecting
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub gap_threshold_seconds: f64,
    pub sessions: Vec<SessionReport>,
    /// Files were actually created
    pub written: bool,
}

impl SplitReport {
    pub fn activity_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.sessions.iter().filter_map(|s| s.file.as_deref())
    }
}

pub fn load_session(path: &Path, pattern: &TimePattern) -> Result<Session> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!(
            "{} is not valid UTF-8; invalid bytes are written as U+FFFD",
            path.display()
        );
    }
    Ok(tcxsplit_parser::parse(&text, pattern)?)
}

fn detect(input: &Path, config: &Config) -> Result<Vec<Session>> {
    let options = config.split_options()?;
    let session = load_session(input, &options.timestamp_pattern)?;
    Ok(split_activities(session, &options))
}

fn report(
    input: &Path,
    config: &Config,
    sessions: &[Session],
    files: Option<&[PathBuf]>,
    written: bool,
) -> SplitReport {
    let sessions = summarize_sessions(sessions)
        .into_iter()
        .enumerate()
        .map(|(i, summary)| SessionReport {
            summary,
            file: files.and_then(|files| files.get(i).cloned()),
        })
        .collect();

    SplitReport {
        input: input.to_path_buf(),
        gap_threshold_seconds: config.gap_threshold_seconds,
        sessions,
        written,
    }
}

/// Report the activities found in `input` without planning any output.
pub fn inspect_file(input: &Path, config: &Config) -> Result<SplitReport> {
    let sessions = detect(input, config)?;
    Ok(report(input, config, &sessions, None, false))
}

/// Split `input` and write one file per activity into the configured output
/// directory. A single activity produces no output. With `dry_run` the file
/// names are planned but nothing is created.
pub fn split_file(input: &Path, config: &Config, dry_run: bool) -> Result<SplitReport> {
    let sessions = detect(input, config)?;

    if sessions.len() < 2 {
        log::info!("no gap above {}s; nothing to write", config.gap_threshold_seconds);
        return Ok(report(input, config, &sessions, None, false));
    }

    let dir = config.output_dir();
    let paths = plan_paths(&sessions, &config.filename_pattern()?, &dir);

    if dry_run {
        return Ok(report(input, config, &sessions, Some(&paths), false));
    }

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|source| Error::Write {
            path: dir.clone(),
            source,
        })?;
    }
    write_all(&sessions, &paths)?;
    Ok(report(input, config, &sessions, Some(&paths), true))
}
