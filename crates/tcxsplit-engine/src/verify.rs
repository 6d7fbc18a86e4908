//! Gap detection.
//!
//! A pure scan that reports the first discontinuity only. Cuts travel up
//! as return values: a track reports a sample index, a lap wraps it with
//! the track index, a session wraps that with the lap index.

use tcxsplit_types::{Lap, Session, Track, seconds_between};

/// First gap inside a lap: track `track` must be cut before sample
/// `trackpoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapCut {
    pub track: usize,
    pub trackpoint: usize,
}

impl LapCut {
    /// Index the lap itself is split at once the track tail has been
    /// inserted as its own track.
    pub fn lap_index(&self) -> usize {
        self.track + 1
    }
}

/// First gap found in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCut {
    /// Lap `lap` contains a gap; the session is split after the lap's head.
    WithinLap { lap: usize, cut: LapCut },
    /// Lap `at` starts too long after lap `at - 1`.
    BetweenLaps { at: usize },
}

impl SessionCut {
    /// Index of the first lap of the new session.
    pub fn session_index(&self) -> usize {
        match self {
            SessionCut::WithinLap { lap, .. } => lap + 1,
            SessionCut::BetweenLaps { at } => *at,
        }
    }
}

/// Index of the first sample that follows a gap longer than `threshold`
/// seconds.
pub fn verify_track(track: &Track, threshold: f64) -> Option<usize> {
    track
        .trackpoints
        .windows(2)
        .position(|pair| seconds_between(&pair[0].time, &pair[1].time) > threshold)
        .map(|i| i + 1)
}

/// Only gaps inside tracks are reported; time between tracks of one lap is
/// not inspected.
pub fn verify_lap(lap: &Lap, threshold: f64) -> Option<LapCut> {
    lap.tracks.iter().enumerate().find_map(|(track, t)| {
        verify_track(t, threshold).map(|trackpoint| LapCut { track, trackpoint })
    })
}

pub fn verify_session(session: &Session, threshold: f64) -> Option<SessionCut> {
    let mut previous_start = session.laps.first()?.start_time;

    for (index, lap) in session.laps.iter().enumerate() {
        if let Some(cut) = verify_lap(lap, threshold) {
            return Some(SessionCut::WithinLap { lap: index, cut });
        }
        if seconds_between(&previous_start, &lap.start_time) > threshold {
            return Some(SessionCut::BetweenLaps { at: index });
        }
        previous_start = lap.start_time;
    }
    None
}
