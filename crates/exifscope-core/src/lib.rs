//! exifscope-core - Embeddable image metadata inspection library.
//!
//! exifscope takes a single image and derives everything a forensic
//! first pass wants to know: the normalized EXIF tag map, decimal GPS
//! coordinates with a reverse-geocoded address, a timestamp consistency
//! verdict, a content integrity digest, and an LSB steganography check.
//!
//! # Architecture
//!
//! One linear pass per image, no state between invocations:
//!
//! ```text
//! Image → Validate → Decode → EXIF → GPS → Geocode
//!                               ↘ Timestamps / Hash / Stego → Report
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use exifscope_core::{Config, Inspector};
//!
//! #[tokio::main]
//! async fn main() -> exifscope_core::Result<()> {
//!     let config = Config::load()?;
//!     let inspector = Inspector::new(&config);
//!
//!     let report = inspector.inspect("./photo.jpg".as_ref()).await?;
//!     println!("Hash: {}", report.content_hash);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod geocode;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, ExifScopeError, PipelineError, PipelineResult, Result};
pub use geocode::ReverseGeocoder;
pub use pipeline::{InspectOptions, Inspector};
pub use types::{
    Coordinates, ExifMap, GpsInfo, GpsValue, InspectionReport, MetadataExport, StegoFinding,
    TagValue, TimestampReport,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
