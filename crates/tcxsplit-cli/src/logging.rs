use crate::types::LogLevel;

/// Log to stderr so reports on stdout stay machine-readable. `RUST_LOG`
/// still refines the filter per module.
pub fn init(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(level.into())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
