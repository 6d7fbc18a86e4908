use chrono::{DateTime, Utc};

use super::{TextSpan, Trackpoint};

/// A contiguous run of samples inside a lap.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Opening `<Track>` line and anything before the first sample
    pub before: TextSpan,
    pub trackpoints: Vec<Trackpoint>,
    /// Closing `</Track>` line and anything after the last sample
    pub after: TextSpan,

    /// Subtracted from each sample's recorded distance when this track
    /// starts mid-activity (the product of a split)
    pub distance_offset: f64,
    pub dirty: bool,
}

impl Track {
    pub fn first_time(&self) -> Option<DateTime<Utc>> {
        self.trackpoints.first().map(|tp| tp.time)
    }
}
