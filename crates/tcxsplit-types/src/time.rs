use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Error, Result};

/// Timestamp pattern used by Garmin exports. The fractional part and the
/// UTC marker are literal: sub-second precision is not carried.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// A validated strftime pattern.
///
/// chrono panics when formatting with an invalid specifier, so patterns
/// coming from configuration go through [`TimePattern::new`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePattern(String);

impl TimePattern {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() || StrftimeItems::new(&pattern).any(|item| item == Item::Error) {
            return Err(Error::InvalidPattern(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `text` as a UTC timestamp. Patterns without an offset are
    /// interpreted as UTC.
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_str(text, &self.0) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(text, &self.0)
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Like [`TimePattern::parse`] but reports the failing input line.
    pub fn parse_at(&self, text: &str, line: usize) -> Result<DateTime<Utc>> {
        self.parse(text).ok_or_else(|| Error::TimeFormat {
            line,
            text: text.to_string(),
            pattern: self.0.clone(),
        })
    }

    pub fn format(&self, time: &DateTime<Utc>) -> String {
        time.format(&self.0).to_string()
    }
}

impl Default for TimePattern {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP_PATTERN.to_string())
    }
}

/// Seconds from `earlier` to `later`, millisecond resolution.
pub fn seconds_between(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> f64 {
    (*later - *earlier).num_milliseconds() as f64 / 1000.0
}
