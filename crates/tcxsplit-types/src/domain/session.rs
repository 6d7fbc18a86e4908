use chrono::{DateTime, Utc};

use super::{Lap, TextSpan, Trackpoint};

/// One recorded activity; becomes one output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Everything before the first lap, including the `<Id>` line
    pub header: TextSpan,
    pub laps: Vec<Lap>,
    /// Everything after the last lap
    pub footer: TextSpan,

    /// Value of the `<Id>` field
    pub id: Option<String>,
    /// Set on sessions produced by a split; their `<Id>` gets rewritten
    pub dirty: bool,
}

impl Session {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.laps.first().map(|lap| lap.start_time)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.laps.iter().rev().find_map(|lap| lap.end_time())
    }

    pub fn trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
        self.laps.iter().flat_map(|lap| lap.trackpoints())
    }

    pub fn track_count(&self) -> usize {
        self.laps.iter().map(|lap| lap.tracks.len()).sum()
    }

    pub fn trackpoint_count(&self) -> usize {
        self.trackpoints().count()
    }
}
