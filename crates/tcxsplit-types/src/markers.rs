//! Line-level markers of the TCX format.
//!
//! Structure is recognized by substring tests on whole lines, field values
//! by the capture patterns below. Nothing here understands XML.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::format_decimal;

pub const LAP_OPEN: &str = "<Lap";
pub const LAP_CLOSE: &str = "</Lap>";
pub const TRACK_OPEN: &str = "<Track";
pub const TRACK_CLOSE: &str = "</Track";
pub const TRACKPOINT_OPEN: &str = "<Trackpoint";
pub const TRACKPOINT_CLOSE: &str = "</Trackpoint";

pub const ID: &str = "<Id";
pub const START_TIME: &str = "StartTime=";
pub const TIME: &str = "<Time";
pub const DISTANCE: &str = "<DistanceMeters>";
pub const TOTAL_TIME: &str = "<TotalTimeSeconds>";

static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Id>([^<]+)</Id>").unwrap());
static START_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"StartTime="([^"]+)""#).unwrap());
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<Time>([^<]+)</Time>").unwrap());
static DISTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<DistanceMeters>([0-9.]+)</DistanceMeters>").unwrap());
static TOTAL_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<TotalTimeSeconds>([0-9.]+)</TotalTimeSeconds>").unwrap());

// Rewrites also match a previously written negative value (a sample recorded
// below its track's offset), so a second rewrite still lands.
static DISTANCE_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<DistanceMeters>-?[0-9.]+</DistanceMeters>").unwrap());
static TOTAL_TIME_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<TotalTimeSeconds>-?[0-9.]+</TotalTimeSeconds>").unwrap());

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn capture_id(line: &str) -> Option<&str> {
    capture(&ID_RE, line)
}

pub fn capture_start_time(line: &str) -> Option<&str> {
    capture(&START_TIME_RE, line)
}

pub fn capture_time(line: &str) -> Option<&str> {
    capture(&TIME_RE, line)
}

/// `None` when the marker is absent or the digits do not form a number
/// (e.g. `1.2.3`).
pub fn capture_distance(line: &str) -> Option<f64> {
    capture(&DISTANCE_RE, line).and_then(|s| s.parse().ok())
}

pub fn capture_total_time(line: &str) -> Option<f64> {
    capture(&TOTAL_TIME_RE, line).and_then(|s| s.parse().ok())
}

pub fn replace_id(line: &str, id: &str) -> String {
    let replacement = format!("<Id>{}</Id>", id);
    ID_RE.replace_all(line, NoExpand(&replacement)).into_owned()
}

pub fn replace_start_time(line: &str, start_time: &str) -> String {
    let replacement = format!("StartTime=\"{}\"", start_time);
    START_TIME_RE
        .replace_all(line, NoExpand(&replacement))
        .into_owned()
}

pub fn replace_distance(line: &str, meters: f64) -> String {
    let replacement = format!("<DistanceMeters>{}</DistanceMeters>", format_decimal(meters));
    DISTANCE_FIELD_RE
        .replace_all(line, NoExpand(&replacement))
        .into_owned()
}

pub fn replace_total_time(line: &str, seconds: f64) -> String {
    let replacement = format!(
        "<TotalTimeSeconds>{}</TotalTimeSeconds>",
        format_decimal(seconds)
    );
    TOTAL_TIME_FIELD_RE
        .replace_all(line, NoExpand(&replacement))
        .into_owned()
}
