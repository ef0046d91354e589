//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Input handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Accepted file extensions. This is the upload gate: actual content
    /// is not sniffed before decode.
    pub supported_formats: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
            ],
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
        }
    }
}

/// Reverse-geocoding endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeConfig {
    /// Reverse-geocoding endpoint. Must answer
    /// `GET {endpoint}?format=json&lat=..&lon=..` with a JSON body
    /// carrying `display_name`.
    pub endpoint: String,

    /// User-Agent sent with each lookup. Nominatim's usage policy
    /// requires an identifying agent.
    pub user_agent: String,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://nominatim.openstreetmap.org/reverse".to_string(),
            user_agent: format!("exifscope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
