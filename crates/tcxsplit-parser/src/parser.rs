use chrono::{DateTime, Utc};
use tcxsplit_types::markers::{
    self, DISTANCE, ID, LAP_CLOSE, LAP_OPEN, TIME, TOTAL_TIME, TRACK_CLOSE, TRACK_OPEN,
    TRACKPOINT_CLOSE, TRACKPOINT_OPEN,
};
use tcxsplit_types::{Error, Lap, Result, Session, TextSpan, TimePattern, Track, Trackpoint};

use crate::LineStore;

/// Builds the record tree from a [`LineStore`].
///
/// Lines seen between two children are attached to the trailing text of
/// the earlier child, so writing the tree back reproduces the input order.
pub struct Parser<'a> {
    lines: &'a [&'a str],
    pattern: &'a TimePattern,
}

impl<'a> Parser<'a> {
    pub fn new(store: &'a LineStore<'a>, pattern: &'a TimePattern) -> Self {
        Self {
            lines: store.as_slice(),
            pattern,
        }
    }

    /// Consume every line into one session.
    pub fn parse_session(&self) -> Result<Session> {
        let mut header = TextSpan::new();
        let mut laps: Vec<Lap> = Vec::new();
        let mut pending = TextSpan::new();
        let mut id = None;

        let mut index = 0;
        while index < self.lines.len() {
            let line = self.lines[index];

            if line.contains(LAP_OPEN) {
                if let Some(previous) = laps.last_mut() {
                    previous.after.append(&mut pending);
                }
                let (lap, next) = self.parse_lap(index)?;
                laps.push(lap);
                index = next;
                continue;
            }

            if laps.is_empty() {
                if line.contains(ID) {
                    let value = markers::capture_id(line).ok_or_else(|| {
                        Error::malformed(index + 1, "<Id> field without a value")
                    })?;
                    id = Some(value.to_string());
                }
                header.push(line.to_string());
            } else {
                pending.push(line.to_string());
            }
            index += 1;
        }

        if laps.is_empty() {
            return Err(Error::malformed(
                self.lines.len(),
                "no <Lap> found in input",
            ));
        }

        let session = Session {
            header,
            laps,
            footer: pending,
            id,
            dirty: false,
        };
        log::debug!(
            "parsed {} lines: {} laps, {} tracks, {} trackpoints",
            self.lines.len(),
            session.laps.len(),
            session.track_count(),
            session.trackpoint_count()
        );
        Ok(session)
    }

    /// Parse the lap whose opening line is at `start`. Returns the lap and
    /// the index of the line following `</Lap>`.
    pub fn parse_lap(&self, start: usize) -> Result<(Lap, usize)> {
        let opening = self.lines[start];
        let start_text = markers::capture_start_time(opening).ok_or_else(|| {
            Error::malformed(start + 1, "<Lap> without a StartTime attribute")
        })?;
        let start_time = self.pattern.parse_at(start_text, start + 1)?;

        let mut before = vec![opening.to_string()];
        let mut tracks: Vec<Track> = Vec::new();
        let mut pending = TextSpan::new();
        let mut distance = None;
        let mut total_time_seconds = None;

        let mut index = start + 1;
        while index < self.lines.len() {
            let line = self.lines[index];

            if line.contains(TRACK_OPEN) {
                if let Some(previous) = tracks.last_mut() {
                    previous.after.append(&mut pending);
                }
                let (track, next) = self.parse_track(index)?;
                tracks.push(track);
                index = next;
                continue;
            }

            if line.contains(LAP_CLOSE) {
                pending.push(line.to_string());
                let lap = Lap {
                    before,
                    tracks,
                    after: pending,
                    start_time,
                    distance,
                    total_time_seconds,
                    dirty: false,
                };
                return Ok((lap, index + 1));
            }

            if tracks.is_empty() {
                if line.contains(DISTANCE) {
                    distance = Some(self.distance_at(line, index)?);
                } else if line.contains(TOTAL_TIME) {
                    let seconds = markers::capture_total_time(line).ok_or_else(|| {
                        Error::malformed(index + 1, "<TotalTimeSeconds> without a numeric value")
                    })?;
                    total_time_seconds = Some(seconds);
                }
                before.push(line.to_string());
            } else {
                pending.push(line.to_string());
            }
            index += 1;
        }

        Err(Error::malformed(
            start + 1,
            "lap opened here is never closed by </Lap>",
        ))
    }

    /// Parse the track whose opening line is at `start`.
    pub fn parse_track(&self, start: usize) -> Result<(Track, usize)> {
        let mut before = vec![self.lines[start].to_string()];
        let mut trackpoints: Vec<Trackpoint> = Vec::new();
        let mut pending = TextSpan::new();

        let mut index = start + 1;
        while index < self.lines.len() {
            let line = self.lines[index];

            if line.contains(TRACKPOINT_OPEN) {
                if let Some(previous) = trackpoints.last_mut() {
                    previous.lines.append(&mut pending);
                }
                let (trackpoint, next) = self.parse_trackpoint(index)?;
                trackpoints.push(trackpoint);
                index = next;
                continue;
            }

            if line.contains(TRACK_CLOSE) {
                pending.push(line.to_string());
                let track = Track {
                    before,
                    trackpoints,
                    after: pending,
                    distance_offset: 0.0,
                    dirty: false,
                };
                return Ok((track, index + 1));
            }

            if trackpoints.is_empty() {
                before.push(line.to_string());
            } else {
                pending.push(line.to_string());
            }
            index += 1;
        }

        Err(Error::malformed(
            start + 1,
            "track opened here is never closed by </Track>",
        ))
    }

    /// Parse the trackpoint whose opening line is at `start`. The opening
    /// line is scanned for fields too, so single-line samples work.
    pub fn parse_trackpoint(&self, start: usize) -> Result<(Trackpoint, usize)> {
        let mut lines = TextSpan::new();
        let mut time: Option<DateTime<Utc>> = None;
        let mut distance = None;

        let mut index = start;
        while index < self.lines.len() {
            let line = self.lines[index];
            lines.push(line.to_string());

            if line.contains(TIME) {
                let text = markers::capture_time(line).ok_or_else(|| {
                    Error::malformed(index + 1, "<Time> field without a value")
                })?;
                time = Some(self.pattern.parse_at(text, index + 1)?);
            }
            if line.contains(DISTANCE) {
                distance = Some(self.distance_at(line, index)?);
            }

            if line.contains(TRACKPOINT_CLOSE) {
                let time = time.ok_or_else(|| {
                    Error::malformed(start + 1, "trackpoint without a <Time> field")
                })?;
                if distance.is_none() {
                    log::debug!("trackpoint at line {} has no distance reading", start + 1);
                }
                let trackpoint = Trackpoint {
                    lines,
                    time,
                    distance,
                };
                return Ok((trackpoint, index + 1));
            }
            index += 1;
        }

        Err(Error::malformed(
            start + 1,
            "trackpoint opened here is never closed by </Trackpoint>",
        ))
    }

    fn distance_at(&self, line: &str, index: usize) -> Result<f64> {
        markers::capture_distance(line).ok_or_else(|| {
            Error::malformed(index + 1, "<DistanceMeters> without a numeric value")
        })
    }
}
