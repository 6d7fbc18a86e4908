//! Ready-made exports shared by the parser, engine, runtime and CLI tests.

use crate::TcxBuilder;

/// Two hours between samples of the same activity is still one activity
/// under the default threshold.
pub const DEFAULT_GAP_SECONDS: f64 = 7200.0;

/// One lap, one track, four samples, with a 200000 s gap before the third
/// sample: `[T, T+10, T+200000, T+200010]`.
pub fn gap_inside_track() -> TcxBuilder {
    TcxBuilder::new()
        .lap(0)
        .point(0, 0.0)
        .point(10, 50.0)
        .point(200_000, 1000.0)
        .point(200_010, 1040.0)
}

/// One lap, two tracks, with the gap inside the first track:
/// `[T, T+10, T+200000 | T+200100, T+200110]`.
pub fn gap_in_first_track() -> TcxBuilder {
    TcxBuilder::new()
        .lap(0)
        .point(0, 0.0)
        .point(10, 50.0)
        .point(200_000, 1000.0)
        .track()
        .point(200_100, 1010.0)
        .point(200_110, 1060.0)
}

/// Two laps whose start times are a day apart, no gap inside either lap.
pub fn gap_between_laps() -> TcxBuilder {
    TcxBuilder::new()
        .lap(0)
        .point(0, 0.0)
        .point(60, 200.0)
        .lap(86_400)
        .point(86_400, 0.0)
        .point(86_460, 180.0)
}

/// A single continuous activity: three laps, the middle one with two tracks.
pub fn continuous() -> TcxBuilder {
    TcxBuilder::new()
        .lap(0)
        .point(0, 0.0)
        .point(30, 100.0)
        .lap(60)
        .point(60, 200.0)
        .point(90, 300.0)
        .track()
        .point(600, 310.0)
        .point(630, 400.0)
        .lap(700)
        .point(700, 450.0)
        .point(760, 600.0)
}

/// Three activities in one lap: two gaps inside the same track.
pub fn three_activities() -> TcxBuilder {
    TcxBuilder::new()
        .lap(0)
        .point(0, 0.0)
        .point(10, 40.0)
        .point(10_000, 500.0)
        .point(10_010, 540.0)
        .point(20_000, 900.0)
        .point(20_010, 950.0)
}
