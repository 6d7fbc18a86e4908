//! Report rendering for `split` and `inspect`.

use crate::types::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use tcxsplit_runtime::{SessionReport, SplitReport};

const TIME_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

/// Which command produced the report; selects the closing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Inspect,
    Split,
    DryRun,
}

pub fn print_report(report: &SplitReport, format: OutputFormat, kind: ReportKind) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Plain => print!("{}", render_plain(report, kind)),
    }
    Ok(())
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn time_or_dash(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format(TIME_DISPLAY).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_session(session: &SessionReport) -> String {
    let summary = &session.summary;
    let mut line = format!(
        "  {}. {} .. {}  {}, {}, {}",
        summary.index,
        time_or_dash(summary.start_time),
        time_or_dash(summary.end_time),
        plural(summary.laps, "lap", "laps"),
        plural(summary.tracks, "track", "tracks"),
        plural(summary.trackpoints, "trackpoint", "trackpoints"),
    );
    if let Some(file) = &session.file {
        let _ = write!(line, "  -> {}", file.display());
    }
    line
}

pub fn render_plain(report: &SplitReport, kind: ReportKind) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} (gap threshold {}s)",
        report.input.display(),
        plural(report.activity_count(), "activity", "activities"),
        report.gap_threshold_seconds
    );
    for session in &report.sessions {
        let _ = writeln!(out, "{}", render_session(session));
    }

    let files = plural(report.files().count(), "file", "files");
    match kind {
        ReportKind::Inspect => {}
        ReportKind::Split if report.written => {
            let _ = writeln!(out, "Wrote {}", files);
        }
        ReportKind::DryRun if report.files().next().is_some() => {
            let _ = writeln!(out, "Dry run: {} not written", files);
        }
        ReportKind::Split | ReportKind::DryRun => {
            let _ = writeln!(out, "No gap found; nothing to write");
        }
    }
    out
}
