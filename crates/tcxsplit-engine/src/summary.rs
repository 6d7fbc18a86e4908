use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tcxsplit_types::Session;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Position in chronological order, starting at 1
    pub index: usize,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub laps: usize,
    pub tracks: usize,
    pub trackpoints: usize,
    /// Produced by a split (its derived fields were rewritten)
    pub split: bool,
}

pub fn summarize(index: usize, session: &Session) -> SessionSummary {
    SessionSummary {
        index,
        start_time: session.start_time(),
        end_time: session.end_time(),
        laps: session.laps.len(),
        tracks: session.track_count(),
        trackpoints: session.trackpoint_count(),
        split: session.dirty,
    }
}

pub fn summarize_all(sessions: &[Session]) -> Vec<SessionSummary> {
    sessions
        .iter()
        .enumerate()
        .map(|(i, session)| summarize(i + 1, session))
        .collect()
}
