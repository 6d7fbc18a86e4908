//! File-level operations for tcxsplit: configuration, output naming and
//! transactional writes around the parser and engine.

pub mod config;
pub mod error;
pub mod naming;
pub mod ops;
pub mod writer;

pub use config::{Config, DEFAULT_FILENAME_PATTERN};
pub use error::{Error, Result};
pub use ops::{SessionReport, SplitReport, inspect_file, load_session, split_file};
