use chrono::{DateTime, Duration, TimeZone, Utc};

const TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S.000Z";

#[derive(Debug, Clone)]
struct PointSpec {
    offset: i64,
    distance: Option<f64>,
}

#[derive(Debug, Clone)]
struct LapSpec {
    offset: i64,
    tracks: Vec<Vec<PointSpec>>,
}

/// Fluent builder for TCX text.
///
/// Offsets are seconds from the base time. Distances are written with seven
/// decimals the way Garmin devices do, so rewritten fields stand out.
///
/// # Example
/// ```
/// use tcxsplit_testing::TcxBuilder;
///
/// let tcx = TcxBuilder::new()
///     .lap(0)
///     .point(0, 0.0)
///     .point(10, 50.0)
///     .build();
/// assert!(tcx.contains("<Lap StartTime=\"2014-05-10T08:00:00.000Z\">"));
/// ```
#[derive(Debug, Clone)]
pub struct TcxBuilder {
    base: DateTime<Utc>,
    laps: Vec<LapSpec>,
    line_ending: &'static str,
}

impl Default for TcxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TcxBuilder {
    /// Builder anchored at 2014-05-10 08:00:00 UTC.
    pub fn new() -> Self {
        Self::with_base(Utc.with_ymd_and_hms(2014, 5, 10, 8, 0, 0).unwrap())
    }

    pub fn with_base(base: DateTime<Utc>) -> Self {
        Self {
            base,
            laps: Vec::new(),
            line_ending: "\n",
        }
    }

    /// Terminate lines with `\r\n` instead of `\n`.
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Start a new lap (with an empty first track) at `offset` seconds.
    pub fn lap(mut self, offset: i64) -> Self {
        self.laps.push(LapSpec {
            offset,
            tracks: vec![Vec::new()],
        });
        self
    }

    /// Start a new track in the current lap.
    pub fn track(mut self) -> Self {
        self.current_lap().tracks.push(Vec::new());
        self
    }

    pub fn point(self, offset: i64, distance: f64) -> Self {
        self.push_point(offset, Some(distance))
    }

    pub fn point_without_distance(self, offset: i64) -> Self {
        self.push_point(offset, None)
    }

    pub fn time(&self, offset: i64) -> DateTime<Utc> {
        self.base + Duration::seconds(offset)
    }

    pub fn timestamp(&self, offset: i64) -> String {
        self.time(offset).format(TIME_PATTERN).to_string()
    }

    pub fn build(&self) -> String {
        let mut out = Lines::new(self.line_ending);
        out.push(0, r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>"#);
        out.push(
            0,
            r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">"#,
        );
        out.push(1, "<Activities>");
        out.push(2, r#"<Activity Sport="Running">"#);
        let id_offset = self.laps.first().map(|lap| lap.offset).unwrap_or(0);
        out.push(3, &format!("<Id>{}</Id>", self.timestamp(id_offset)));

        for lap in &self.laps {
            self.build_lap(&mut out, lap);
        }

        out.push(3, "<Creator xsi:type=\"Device_t\">");
        out.push(4, "<Name>Forerunner 410</Name>");
        out.push(4, "<UnitId>3836425947</UnitId>");
        out.push(3, "</Creator>");
        out.push(2, "</Activity>");
        out.push(1, "</Activities>");
        out.push(0, "</TrainingCenterDatabase>");
        out.finish()
    }

    fn build_lap(&self, out: &mut Lines, lap: &LapSpec) {
        let points: Vec<&PointSpec> = lap.tracks.iter().flatten().collect();
        let total = points.last().map(|p| p.offset - lap.offset).unwrap_or(0);
        let distance = points.iter().rev().find_map(|p| p.distance).unwrap_or(0.0);

        out.push(3, &format!("<Lap StartTime=\"{}\">", self.timestamp(lap.offset)));
        out.push(4, &format!("<TotalTimeSeconds>{:.7}</TotalTimeSeconds>", total as f64));
        out.push(4, &format!("<DistanceMeters>{:.7}</DistanceMeters>", distance));
        out.push(4, "<Calories>0</Calories>");
        out.push(4, "<Intensity>Active</Intensity>");
        out.push(4, "<TriggerMethod>Manual</TriggerMethod>");
        for track in &lap.tracks {
            out.push(4, "<Track>");
            for point in track {
                out.push(5, "<Trackpoint>");
                out.push(6, &format!("<Time>{}</Time>", self.timestamp(point.offset)));
                out.push(6, "<AltitudeMeters>56.4000000</AltitudeMeters>");
                if let Some(distance) = point.distance {
                    out.push(6, &format!("<DistanceMeters>{:.7}</DistanceMeters>", distance));
                }
                out.push(6, "<SensorState>Absent</SensorState>");
                out.push(5, "</Trackpoint>");
            }
            out.push(4, "</Track>");
        }
        out.push(3, "</Lap>");
    }

    fn push_point(mut self, offset: i64, distance: Option<f64>) -> Self {
        if self.laps.is_empty() {
            self = self.lap(offset);
        }
        self.current_lap()
            .tracks
            .last_mut()
            .expect("lap always has a track")
            .push(PointSpec { offset, distance });
        self
    }

    fn current_lap(&mut self) -> &mut LapSpec {
        if self.laps.is_empty() {
            self.laps.push(LapSpec {
                offset: 0,
                tracks: vec![Vec::new()],
            });
        }
        self.laps.last_mut().expect("lap exists")
    }
}

struct Lines {
    text: String,
    line_ending: &'static str,
}

impl Lines {
    fn new(line_ending: &'static str) -> Self {
        Self {
            text: String::new(),
            line_ending,
        }
    }

    fn push(&mut self, depth: usize, content: &str) {
        self.text.push_str(&"  ".repeat(depth));
        self.text.push_str(content);
        self.text.push_str(self.line_ending);
    }

    fn finish(self) -> String {
        self.text
    }
}
