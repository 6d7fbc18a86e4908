use std::fmt;
use std::path::PathBuf;

/// Result type for tcxsplit-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Input could not be parsed
    Parse(tcxsplit_types::Error),

    /// Input file could not be read
    Read { path: PathBuf, source: std::io::Error },

    /// Output file could not be written or moved into place
    Write { path: PathBuf, source: std::io::Error },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "Parse error: {}", err),
            Error::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Error::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<tcxsplit_types::Error> for Error {
    fn from(err: tcxsplit_types::Error) -> Self {
        match err {
            tcxsplit_types::Error::InvalidPattern(_) => Error::Config(err.to_string()),
            other => Error::Parse(other),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
