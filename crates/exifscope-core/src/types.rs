//! Core data types for the exifscope inspection pipeline.
//!
//! These types represent the output of inspecting a single image. Raw
//! library values (rationals, undecoded byte runs) never appear here:
//! everything is reduced to plain scalars and lists before it reaches
//! an `InspectionReport`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// A normalized metadata value.
///
/// The untagged representation serializes to a bare JSON scalar or array,
/// which is what guarantees the exported document contains only
/// float/int/string values and lists thereof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Integer-typed tag (orientation, ISO, pixel dimensions, ...)
    Int(i64),
    /// Rational tags reduced to numerator/denominator division
    Float(f64),
    /// ASCII or successfully UTF-8-decoded byte tags
    Text(String),
    /// Multi-component values, each member normalized by the same rules
    List(Vec<TagValue>),
}

impl TagValue {
    /// Borrow the inner string if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(n) => write!(f, "{}", n),
            TagValue::Float(x) => write!(f, "{}", x),
            TagValue::Text(s) => write!(f, "{}", s),
            TagValue::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The normalized EXIF map: standard tag name to normalized value.
///
/// A BTreeMap keeps rendering and export order deterministic.
pub type ExifMap = BTreeMap<String, TagValue>;

/// A raw GPS sub-tag value, kept separate from the main map.
///
/// The resolver consumes the rational triples and hemisphere refs as-is;
/// anything else is carried as display text.
#[derive(Debug, Clone, PartialEq)]
pub enum GpsValue {
    /// Unreduced (numerator, denominator) pairs
    Rationals(Vec<(u32, u32)>),
    /// Hemisphere refs, datum names, and other string-shaped values
    Text(String),
}

/// The GPS sub-map: GPS tag name to raw value.
pub type GpsInfo = BTreeMap<String, GpsValue>;

/// A resolved coordinate pair in signed decimal degrees.
///
/// South and west are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw timestamp fields and the modification verdict.
///
/// Values are the raw EXIF strings; no date parsing happens anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimestampReport {
    /// DateTimeOriginal — when the photo was captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    /// DateTimeDigitized — when the photo was digitized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digitized: Option<String>,

    /// DateTime — when the file was last modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// True iff original and modified are both present and their raw
    /// strings differ
    pub modified_after_capture: bool,
}

/// Outcome of the steganography check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum StegoFinding {
    /// A non-empty hidden payload was extracted
    Payload(String),
    /// Nothing extracted, or the image is not encoded via the LSB scheme
    NoneDetected,
}

/// The complete result of inspecting one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    // === File identification ===
    /// Path to the inspected file
    pub file_path: PathBuf,

    /// Just the filename portion
    pub file_name: String,

    // === Image properties ===
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Detected format ("jpeg", "png", ...)
    pub format: String,

    /// File size in bytes
    pub file_size: u64,

    // === Derived metadata ===
    /// The normalized EXIF map
    pub exif: ExifMap,

    /// Decimal coordinates, if the GPS block was complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    /// Reverse-geocoded address (or a placeholder when the lookup could
    /// not produce one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Timestamp consistency analysis
    pub timestamps: TimestampReport,

    /// BLAKE3 digest of the original file bytes, lowercase hex
    pub content_hash: String,

    /// Steganography check outcome
    pub steganography: StegoFinding,
}

/// The downloadable metadata document.
///
/// Shape is fixed: `{"EXIF Data": {...}, "GPS Coordinates": {"Latitude":
/// <float>, "Longitude": <float>}}`, with the GPS key omitted entirely
/// when no coordinates were resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataExport {
    #[serde(rename = "EXIF Data")]
    pub exif: ExifMap,

    #[serde(
        rename = "GPS Coordinates",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gps: Option<GpsExport>,
}

/// The labeled coordinate sub-object of the export document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsExport {
    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl MetadataExport {
    /// Build the export document from an inspection report.
    pub fn from_report(report: &InspectionReport) -> Self {
        Self {
            exif: report.exif.clone(),
            gps: report.coordinates.map(|c| GpsExport {
                latitude: c.latitude,
                longitude: c.longitude,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_value_serializes_untagged() {
        let mut map = ExifMap::new();
        map.insert("Make".to_string(), TagValue::Text("Canon".to_string()));
        map.insert("Orientation".to_string(), TagValue::Int(1));
        map.insert("XResolution".to_string(), TagValue::Float(72.0));
        map.insert(
            "YCbCrSubSampling".to_string(),
            TagValue::List(vec![TagValue::Int(2), TagValue::Int(1)]),
        );

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"Make\":\"Canon\""));
        assert!(json.contains("\"Orientation\":1"));
        assert!(json.contains("\"XResolution\":72.0"));
        assert!(json.contains("\"YCbCrSubSampling\":[2,1]"));
        // No enum variant names leak into the document
        assert!(!json.contains("Int"));
        assert!(!json.contains("Float"));
    }

    #[test]
    fn test_tag_value_display() {
        assert_eq!(TagValue::Text("Canon".into()).to_string(), "Canon");
        assert_eq!(TagValue::Float(2.8).to_string(), "2.8");
        assert_eq!(
            TagValue::List(vec![TagValue::Float(40.0), TagValue::Float(26.5)]).to_string(),
            "(40, 26.5)"
        );
    }

    #[test]
    fn test_export_omits_gps_when_unresolved() {
        let export = MetadataExport {
            exif: ExifMap::new(),
            gps: None,
        };
        let json = serde_json::to_string(&export).unwrap();
        assert!(json.contains("EXIF Data"));
        assert!(!json.contains("GPS Coordinates"));
    }

    #[test]
    fn test_export_labels_coordinates() {
        let export = MetadataExport {
            exif: ExifMap::new(),
            gps: Some(GpsExport {
                latitude: 40.446,
                longitude: -79.948,
            }),
        };
        let json = serde_json::to_string(&export).unwrap();
        assert!(json.contains("\"GPS Coordinates\":{\"Latitude\":40.446,\"Longitude\":-79.948}"));
    }

    #[test]
    fn test_export_roundtrip_without_gps() {
        let mut exif = ExifMap::new();
        exif.insert("Model".to_string(), TagValue::Text("EOS R5".to_string()));
        let export = MetadataExport { exif, gps: None };

        let json = serde_json::to_string(&export).unwrap();
        let parsed: MetadataExport = serde_json::from_str(&json).unwrap();
        assert!(parsed.gps.is_none());
        assert_eq!(
            parsed.exif.get("Model"),
            Some(&TagValue::Text("EOS R5".to_string()))
        );
    }
}
