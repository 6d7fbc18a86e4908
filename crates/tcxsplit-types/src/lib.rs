pub mod domain;
pub mod error;
pub mod markers;
pub mod time;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use time::{DEFAULT_TIMESTAMP_PATTERN, TimePattern, seconds_between};
pub use util::format_decimal;
