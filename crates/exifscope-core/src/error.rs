//! Error types for the exifscope inspection pipeline.
//!
//! Errors are organized by stage. Two conditions from the metadata layer
//! are deliberately NOT errors: a byte-valued tag that fails UTF-8 decoding
//! is dropped silently, and an incomplete GPS block simply yields no
//! coordinates. Everything else that goes wrong aborts the pass.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for exifscope operations.
#[derive(Error, Debug)]
pub enum ExifScopeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The image carries no EXIF block at all. Halts the pass gracefully;
    /// nothing downstream of extraction runs.
    #[error("No EXIF metadata found in {path}")]
    NoMetadata { path: PathBuf },

    /// The EXIF block exists but could not be parsed
    #[error("Malformed EXIF data in {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Reverse geocoding failed at the transport level (before an HTTP
    /// status was obtained, or with an unreadable body). A non-200 status
    /// is not an error; the client returns a placeholder address instead.
    #[error("Reverse geocoding failed: {message}")]
    Geocode { message: String },

    /// Steganography extraction hit a non-benign fault. The out-of-range
    /// fault of images not encoded via the LSB scheme is folded into
    /// "none detected" before this variant is ever constructed.
    #[error("Steganography extraction failed: {message}")]
    Stego { message: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// File extension is not in the accepted set
    #[error("Unsupported format for {path}: {format:?}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Convenience type alias for exifscope results.
pub type Result<T> = std::result::Result<T, ExifScopeError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
