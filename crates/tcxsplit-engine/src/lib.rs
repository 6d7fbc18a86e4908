// Engine module - gap detection, splitting and recomputation over a parsed export
// This layer sits between the parsed record tree (types/parser) and file output (runtime)

pub mod pipeline;
pub mod recompute;
pub mod serialize;
pub mod split;
pub mod summary;
pub mod verify;

pub use pipeline::{DEFAULT_GAP_THRESHOLD_SECONDS, SplitOptions};
pub use serialize::{render_session, session_lines, write_session};
pub use summary::SessionSummary;
pub use verify::{LapCut, SessionCut, verify_lap, verify_session, verify_track};

use tcxsplit_types::Session;

// Façade API - Stable public interface for runtime and CLI layers

/// Split a session into activities and rewrite the derived fields of every
/// part; the result is in chronological order and ready to serialize.
pub fn split_activities(session: Session, options: &SplitOptions) -> Vec<Session> {
    pipeline::process(session, options)
}

/// Summarize sessions in output order
pub fn summarize_sessions(sessions: &[Session]) -> Vec<SessionSummary> {
    summary::summarize_all(sessions)
}
