use std::fmt;

/// Result type for tcxsplit-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a workout export
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Structure of the input is broken (closing marker never reached,
    /// field marker present without a parsable value, missing required field)
    MalformedInput { line: usize, reason: String },

    /// Timestamp text does not match the configured pattern
    TimeFormat {
        line: usize,
        text: String,
        pattern: String,
    },

    /// A strftime pattern contains an invalid specifier
    InvalidPattern(String),
}

impl Error {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// 1-based input line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedInput { line, .. } | Error::TimeFormat { line, .. } => Some(*line),
            Error::InvalidPattern(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedInput { line, reason } => {
                write!(f, "Malformed input at line {}: {}", line, reason)
            }
            Error::TimeFormat {
                line,
                text,
                pattern,
            } => write!(
                f,
                "Invalid timestamp at line {}: '{}' does not match '{}'",
                line, text, pattern
            ),
            Error::InvalidPattern(pattern) => write!(f, "Invalid time pattern: '{}'", pattern),
        }
    }
}

impl std::error::Error for Error {}
