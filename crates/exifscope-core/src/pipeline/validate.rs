//! Input validation before decoding.

use std::path::Path;

use crate::config::{LimitsConfig, ProcessingConfig};
use crate::error::PipelineError;

/// Validates files before they enter the pipeline.
///
/// The gate is extension-based; content is not sniffed here. A file
/// whose bytes don't match its extension fails in the decode stage
/// instead.
pub struct Validator {
    limits: LimitsConfig,
    formats: Vec<String>,
}

impl Validator {
    /// Create a new validator with the given limits and accepted formats.
    pub fn new(limits: LimitsConfig, processing: &ProcessingConfig) -> Self {
        let formats = processing
            .supported_formats
            .iter()
            .map(|f| f.to_ascii_lowercase())
            .collect();
        Self { limits, formats }
    }

    /// Perform quick validation before reading the file.
    ///
    /// Checks:
    /// - File exists
    /// - Extension is in the accepted set
    /// - File size is within limits
    pub fn validate(&self, path: &Path) -> Result<(), PipelineError> {
        if !path.exists() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !self.formats.contains(&extension) {
            return Err(PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: extension,
            });
        }

        let metadata = std::fs::metadata(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {}", e),
        })?;

        let max_bytes = self.limits.max_file_size_mb * 1024 * 1024;
        if metadata.len() > max_bytes {
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        Ok(())
    }
}
