//! Pipeline orchestration - wires together all inspection stages.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::geocode::ReverseGeocoder;
use crate::types::{InspectionReport, StegoFinding};

use super::decode::{format_to_string, ImageDecoder};
use super::exif::ExifExtractor;
use super::gps::resolve_coordinates;
use super::hash::Hasher;
use super::stego::{self, StegoError};
use super::timestamps::analyze_timestamps;
use super::validate::Validator;

/// Options for controlling inspection behavior.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Skip the reverse-geocoding lookup even when coordinates resolve
    pub skip_geocode: bool,
}

/// The main inspector that orchestrates the full pipeline.
pub struct Inspector {
    validator: Validator,
    geocoder: ReverseGeocoder,
}

impl Inspector {
    /// Create a new inspector with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            validator: Validator::new(config.limits.clone(), &config.processing),
            geocoder: ReverseGeocoder::new(&config.geocode),
        }
    }

    /// Inspect a single image with default options.
    pub async fn inspect(&self, path: &Path) -> Result<InspectionReport> {
        self.inspect_with_options(path, &InspectOptions::default())
            .await
    }

    /// Run the full inspection pass over one image.
    ///
    /// A missing EXIF block surfaces as `PipelineError::NoMetadata` and
    /// nothing downstream of extraction runs. Transport-level geocoding
    /// failures and non-benign steganography faults also abort the pass;
    /// everything softer (incomplete GPS, unreachable address, images
    /// not carrying an LSB payload) degrades into the report itself.
    pub async fn inspect_with_options(
        &self,
        path: &Path,
        options: &InspectOptions,
    ) -> Result<InspectionReport> {
        let start = Instant::now();
        tracing::debug!("Inspecting: {:?}", path);

        self.validator.validate(path)?;
        let bytes = std::fs::read(path)?;

        let decode_start = Instant::now();
        let decoded = ImageDecoder::decode_bytes(&bytes, path)?;
        tracing::trace!("  Decode: {:?}", decode_start.elapsed());

        let exif_start = Instant::now();
        let (exif, gps_info) = ExifExtractor::extract(&bytes, path)?;
        tracing::trace!(
            "  EXIF: {:?} ({} tags, {} GPS sub-tags)",
            exif_start.elapsed(),
            exif.len(),
            gps_info.len()
        );

        let coordinates = resolve_coordinates(&gps_info);

        let address = match coordinates {
            Some(ref coordinates) if !options.skip_geocode => {
                let geocode_start = Instant::now();
                let address = self.geocoder.lookup(coordinates).await?;
                tracing::trace!("  Geocode: {:?}", geocode_start.elapsed());
                Some(address)
            }
            _ => None,
        };

        let timestamps = analyze_timestamps(&exif);

        let hash_start = Instant::now();
        let content_hash = Hasher::digest(&mut Cursor::new(&bytes))?;
        tracing::trace!("  Content hash: {:?}", hash_start.elapsed());

        let stego_start = Instant::now();
        let steganography = match stego::reveal(&decoded.image) {
            Ok(Some(payload)) => StegoFinding::Payload(payload),
            Ok(None) | Err(StegoError::OutOfRange { .. }) => StegoFinding::NoneDetected,
            Err(e) => {
                return Err(PipelineError::Stego {
                    message: e.to_string(),
                }
                .into())
            }
        };
        tracing::trace!("  Steganography: {:?}", stego_start.elapsed());

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!(
            "Inspected {:?} in {:?} ({}x{})",
            file_name,
            start.elapsed(),
            decoded.width,
            decoded.height
        );

        Ok(InspectionReport {
            file_path: path.to_path_buf(),
            file_name,
            width: decoded.width,
            height: decoded.height,
            format: format_to_string(decoded.format),
            file_size: decoded.file_size,
            exif,
            coordinates,
            address,
            timestamps,
            content_hash,
            steganography,
        })
    }
}
