//! Rewrite derived fields of nodes touched by a split.
//!
//! Recorded values on the tree are never changed; only the text that is
//! written back is.

use tcxsplit_types::markers::{self, ID};
use tcxsplit_types::{Lap, Session, TimePattern, Track, Trackpoint, seconds_between};

const DISTANCE_FIELD: &str = "<DistanceMeters";
const TOTAL_TIME_FIELD: &str = "<TotalTimeSeconds";

/// Rewrite the sample's distance text to `recorded - offset`.
pub fn rebase_trackpoint(trackpoint: &mut Trackpoint, offset: f64) {
    if offset == 0.0 {
        return;
    }
    let Some(recorded) = trackpoint.distance else {
        return;
    };
    let rebased = recorded - offset;
    for line in trackpoint
        .lines
        .iter_mut()
        .filter(|line| line.contains(DISTANCE_FIELD))
    {
        *line = markers::replace_distance(line, rebased);
    }
}

pub fn recompute_track(track: &mut Track) {
    if !track.dirty {
        return;
    }
    let offset = track.distance_offset;
    for trackpoint in &mut track.trackpoints {
        rebase_trackpoint(trackpoint, offset);
    }
}

/// Distance recorded since the sample before the last one: the
/// second-to-last sample of the last track, or the last sample of the
/// previous track when the last track holds a single sample.
fn reference_distance(lap: &Lap) -> Option<f64> {
    let (last_track, earlier) = lap.tracks.split_last()?;
    match last_track.trackpoints.as_slice() {
        [.., reference, _] => reference.distance,
        _ => earlier
            .last()
            .and_then(|track| track.trackpoints.last())
            .and_then(|tp| tp.distance),
    }
}

pub fn recompute_lap(lap: &mut Lap) {
    for track in &mut lap.tracks {
        recompute_track(track);
    }
    if !lap.dirty {
        return;
    }

    let Some((last_time, last_distance)) = lap
        .tracks
        .last()
        .and_then(|track| track.trackpoints.last())
        .map(|tp| (tp.time, tp.distance))
    else {
        log::warn!("lap starting {} has no samples to recompute from", lap.start_time);
        return;
    };

    let distance = last_distance.map(|d| d - reference_distance(lap).unwrap_or(0.0));
    let total_time = seconds_between(&lap.start_time, &last_time);
    lap.distance = distance;
    lap.total_time_seconds = Some(total_time);

    for line in &mut lap.before {
        if line.contains(DISTANCE_FIELD) {
            if let Some(distance) = distance {
                *line = markers::replace_distance(line, distance);
            }
        } else if line.contains(TOTAL_TIME_FIELD) {
            *line = markers::replace_total_time(line, total_time);
        }
    }
    log::debug!(
        "lap {}: distance {:?}, duration {}s",
        lap.start_time,
        distance,
        total_time
    );
}

/// Recompute every lap, then rewrite the `<Id>` of split products to their
/// first lap's start time.
pub fn recompute_session(session: &mut Session, pattern: &TimePattern) {
    for lap in &mut session.laps {
        recompute_lap(lap);
    }
    if !session.dirty {
        return;
    }
    let Some(start) = session.start_time() else {
        return;
    };
    let id = pattern.format(&start);
    for line in session.header.iter_mut().filter(|line| line.contains(ID)) {
        *line = markers::replace_id(line, &id);
    }
    session.id = Some(id);
}
