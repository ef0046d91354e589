//! Configuration management for exifscope.
//!
//! Configuration is loaded from the platform config directory (for
//! example `~/.config/exifscope/config.toml` on Linux) with sensible
//! defaults; a missing file is not an error.

mod types;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for exifscope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input handling settings
    pub processing: ProcessingConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Reverse-geocoding endpoint settings
    pub geocode: GeocodeConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories, falling back to
    /// `~/.exifscope/config.toml` if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "exifscope", "exifscope")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".exifscope").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Check configuration values for consistency.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "processing.supported_formats must not be empty".to_string(),
            ));
        }

        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be greater than zero".to_string(),
            ));
        }

        if !self.geocode.endpoint.starts_with("http://")
            && !self.geocode.endpoint.starts_with("https://")
        {
            return Err(ConfigError::ValidationError(format!(
                "geocode.endpoint must be an http(s) URL, got {:?}",
                self.geocode.endpoint
            )));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {:?}, got {:?}",
                LEVELS, self.logging.level
            )));
        }

        if self.logging.format != "pretty" && self.logging.format != "json" {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.processing.supported_formats,
            vec!["jpg", "jpeg", "png"]
        );
        assert!(config.geocode.endpoint.contains("nominatim"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.limits.max_file_size_mb, config.limits.max_file_size_mb);
        assert_eq!(parsed.geocode.endpoint, config.geocode.endpoint);
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\nmax_file_size_mb = 10").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.limits.max_file_size_mb, 10);
        // Unspecified sections keep their defaults
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_rejects_bad_endpoint() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geocode]\nendpoint = \"nominatim.example.org\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_from_rejects_unknown_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
