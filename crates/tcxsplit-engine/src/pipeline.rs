use std::collections::VecDeque;

use tcxsplit_types::{Session, TimePattern};

use crate::recompute::recompute_session;
use crate::split::apply_cut;
use crate::verify::verify_session;

/// Two hours.
pub const DEFAULT_GAP_THRESHOLD_SECONDS: f64 = 7200.0;

#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Longest tolerated pause, in seconds, between consecutive samples or
    /// lap starts of one activity
    pub gap_threshold_seconds: f64,
    /// Pattern used when rewriting lap start times and session ids
    pub timestamp_pattern: TimePattern,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            gap_threshold_seconds: DEFAULT_GAP_THRESHOLD_SECONDS,
            timestamp_pattern: TimePattern::default(),
        }
    }
}

/// Split a session at every gap, one cut per verification.
///
/// Worklist: pop a session, verify it, and on a cut push both parts back
/// to the front (head first); a session without a gap moves to the result.
/// The result is in chronological order. Fields are not recomputed here.
pub fn split_sessions(session: Session, options: &SplitOptions) -> Vec<Session> {
    let mut queue = VecDeque::from([session]);
    let mut finished = Vec::new();

    while let Some(mut current) = queue.pop_front() {
        match verify_session(&current, options.gap_threshold_seconds) {
            Some(cut) => {
                log::debug!("gap found: {:?}", cut);
                let tail = apply_cut(&mut current, cut, &options.timestamp_pattern);
                queue.push_front(tail);
                queue.push_front(current);
            }
            None => finished.push(current),
        }
    }

    log::info!("{} activit{} detected", finished.len(), if finished.len() == 1 { "y" } else { "ies" });
    finished
}

pub fn recompute_sessions(sessions: &mut [Session], pattern: &TimePattern) {
    for session in sessions {
        recompute_session(session, pattern);
    }
}

/// Split and recompute: the sessions returned are ready to serialize.
pub fn process(session: Session, options: &SplitOptions) -> Vec<Session> {
    let mut sessions = split_sessions(session, options);
    recompute_sessions(&mut sessions, &options.timestamp_pattern);
    sessions
}
