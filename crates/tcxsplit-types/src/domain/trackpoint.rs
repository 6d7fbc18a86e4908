use chrono::{DateTime, Utc};

use super::TextSpan;

/// One timestamped sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Trackpoint {
    /// The `<Trackpoint>` block as read, followed by any stray lines that
    /// sat between this point and the next one
    pub lines: TextSpan,

    pub time: DateTime<Utc>,

    /// Cumulative distance as recorded. Never rewritten; re-baselined
    /// values only go to `lines`.
    pub distance: Option<f64>,
}
