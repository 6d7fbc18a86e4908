use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tcxsplit_engine::{DEFAULT_GAP_THRESHOLD_SECONDS, SplitOptions};
use tcxsplit_types::{DEFAULT_TIMESTAMP_PATTERN, TimePattern};

/// Output file names: the first lap start in local-clock style, plus `.tcx`.
pub const DEFAULT_FILENAME_PATTERN: &str = "%Y-%m-%d %I:%M:%S %p";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gap_threshold_seconds: f64,
    /// Pattern every timestamp in the input follows
    pub timestamp_format: String,
    /// Pattern rendering a session start into an output file stem
    pub filename_format: String,
    /// Where split files go; the current directory when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap_threshold_seconds: DEFAULT_GAP_THRESHOLD_SECONDS,
            timestamp_format: DEFAULT_TIMESTAMP_PATTERN.to_string(),
            filename_format: DEFAULT_FILENAME_PATTERN.to_string(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Load from `explicit` (which must exist), or from the default path
    /// when present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                log::debug!("no default config location: {}", err);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("tcxsplit").join("config.toml"))
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        gap_threshold_seconds: Option<f64>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(threshold) = gap_threshold_seconds {
            self.gap_threshold_seconds = threshold;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.gap_threshold_seconds;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::Config(format!(
                "gap threshold must be a positive number of seconds, got {}",
                threshold
            )));
        }
        self.timestamp_pattern()?;
        self.filename_pattern()?;
        Ok(())
    }

    pub fn timestamp_pattern(&self) -> Result<TimePattern> {
        Ok(TimePattern::new(&self.timestamp_format)?)
    }

    pub fn filename_pattern(&self) -> Result<TimePattern> {
        Ok(TimePattern::new(&self.filename_format)?)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn split_options(&self) -> Result<SplitOptions> {
        Ok(SplitOptions {
            gap_threshold_seconds: self.gap_threshold_seconds,
            timestamp_pattern: self.timestamp_pattern()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.gap_threshold_seconds, 7200.0);
        assert_eq!(config.timestamp_format, "%Y-%m-%dT%H:%M:%S.000Z");
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "gap_threshold_seconds = 600\noutput_dir = \"/tmp/rides\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.gap_threshold_seconds, 600.0);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/rides")));
        assert_eq!(config.filename_format, DEFAULT_FILENAME_PATTERN);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for threshold in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = Config::default().with_overrides(Some(threshold), None);
            assert!(matches!(result, Err(Error::Config(_))), "{}", threshold);
        }
    }

    #[test]
    fn test_rejects_bad_pattern() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "timestamp_format = \"%Q\"\n")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));

        Ok(())
    }

    #[test]
    fn test_overrides_replace_loaded_values() -> Result<()> {
        let config = Config::default().with_overrides(Some(60.0), Some(PathBuf::from("out")))?;
        assert_eq!(config.gap_threshold_seconds, 60.0);
        assert_eq!(config.output_dir(), PathBuf::from("out"));
        assert_eq!(config.split_options()?.gap_threshold_seconds, 60.0);

        Ok(())
    }
}
