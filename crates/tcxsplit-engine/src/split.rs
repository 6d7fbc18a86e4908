//! Structural cuts.
//!
//! Each split moves the tail of a node's children into a new sibling. No
//! sample is copied or dropped; only the boundary text a new node needs for
//! its own header and footer is cloned.

use tcxsplit_types::markers::{self, START_TIME};
use tcxsplit_types::{Lap, Session, TimePattern, Track};

use crate::verify::SessionCut;

/// Move samples `at..` into a new track. The new track is re-baselined on
/// the recorded distance of the last sample kept by `track`.
pub fn split_track(track: &mut Track, at: usize) -> Track {
    let trackpoints = track.trackpoints.split_off(at);
    let distance_offset = track
        .trackpoints
        .last()
        .and_then(|tp| tp.distance)
        .unwrap_or(0.0);

    log::debug!(
        "track split: {} samples kept, {} moved, offset {}",
        track.trackpoints.len(),
        trackpoints.len(),
        distance_offset
    );

    Track {
        before: track.before.clone(),
        trackpoints,
        after: track.after.clone(),
        distance_offset,
        dirty: true,
    }
}

/// Move tracks `at..` into a new lap starting at the first moved sample.
/// Both laps need their summary fields recomputed.
pub fn split_lap(lap: &mut Lap, at: usize, pattern: &TimePattern) -> Lap {
    let tracks = lap.tracks.split_off(at);
    let start_time = tracks
        .iter()
        .find_map(|track| track.first_time())
        .unwrap_or(lap.start_time);
    let start_text = pattern.format(&start_time);

    let mut before = lap.before.clone();
    if let Some(opening) = before.iter_mut().find(|line| line.contains(START_TIME)) {
        *opening = markers::replace_start_time(opening, &start_text);
    }

    lap.dirty = true;
    log::debug!("lap split: new lap starts at {}", start_text);

    Lap {
        before,
        tracks,
        after: lap.after.clone(),
        start_time,
        distance: None,
        total_time_seconds: None,
        dirty: true,
    }
}

/// Move laps `at..` into a new session. Header and footer are copied so
/// each session owns its boilerplate.
pub fn split_session(session: &mut Session, at: usize) -> Session {
    let laps = session.laps.split_off(at);
    log::debug!(
        "session split: {} laps kept, {} moved",
        session.laps.len(),
        laps.len()
    );

    Session {
        header: session.header.clone(),
        laps,
        footer: session.footer.clone(),
        id: session.id.clone(),
        dirty: true,
    }
}

/// Apply a cut reported by [`crate::verify_session`] for this session and
/// return the new session holding everything after it.
pub fn apply_cut(session: &mut Session, cut: SessionCut, pattern: &TimePattern) -> Session {
    if let SessionCut::WithinLap {
        lap: lap_index,
        cut: lap_cut,
    } = cut
    {
        let lap = &mut session.laps[lap_index];
        let tail = split_track(&mut lap.tracks[lap_cut.track], lap_cut.trackpoint);
        lap.tracks.insert(lap_cut.track + 1, tail);
        let new_lap = split_lap(lap, lap_cut.lap_index(), pattern);
        session.laps.insert(lap_index + 1, new_lap);
    }
    split_session(session, cut.session_index())
}
