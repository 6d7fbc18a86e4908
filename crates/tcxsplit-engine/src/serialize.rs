use std::io::{self, Write};

use tcxsplit_types::{Lap, Session, Track};

/// Every line of a session in output order: header, laps (leading span,
/// tracks, trailing span), footer.
pub fn session_lines(session: &Session) -> impl Iterator<Item = &str> {
    session
        .header
        .iter()
        .chain(session.laps.iter().flat_map(lap_lines))
        .chain(session.footer.iter())
        .map(String::as_str)
}

fn lap_lines(lap: &Lap) -> impl Iterator<Item = &String> {
    lap.before
        .iter()
        .chain(lap.tracks.iter().flat_map(track_lines))
        .chain(lap.after.iter())
}

fn track_lines(track: &Track) -> impl Iterator<Item = &String> {
    track
        .before
        .iter()
        .chain(track.trackpoints.iter().flat_map(|tp| tp.lines.iter()))
        .chain(track.after.iter())
}

pub fn write_session<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    for line in session_lines(session) {
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

pub fn render_session(session: &Session) -> String {
    session_lines(session).collect()
}
