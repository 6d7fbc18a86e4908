use chrono::{DateTime, Utc};

use super::{TextSpan, Track, Trackpoint};

/// A sub-interval of a session with its own summary fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Lap {
    /// `<Lap StartTime="...">` line followed by the summary fields
    /// (`<TotalTimeSeconds>`, `<DistanceMeters>`, ...) up to the first track
    pub before: TextSpan,
    pub tracks: Vec<Track>,
    /// Everything after the last track up to and including `</Lap>`, plus
    /// stray lines before the next lap
    pub after: TextSpan,

    pub start_time: DateTime<Utc>,
    /// Lap distance as parsed, or as recomputed after a split
    pub distance: Option<f64>,
    pub total_time_seconds: Option<f64>,
    pub dirty: bool,
}

impl Lap {
    pub fn trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
        self.tracks.iter().flat_map(|track| track.trackpoints.iter())
    }

    pub fn last_trackpoint(&self) -> Option<&Trackpoint> {
        self.tracks
            .iter()
            .rev()
            .find_map(|track| track.trackpoints.last())
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.last_trackpoint().map(|tp| tp.time)
    }
}
