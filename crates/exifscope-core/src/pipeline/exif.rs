//! EXIF extraction and normalization.
//!
//! The raw tag map from the parser is split in two: GPS sub-tags keep
//! their raw rational/string values for the coordinate resolver, and
//! everything else is normalized into plain scalars. No rational or
//! undecoded byte value survives into the main map.

use exif::{Context, Exif, Field, In, Reader, Value};
use std::io::Cursor;
use std::path::Path;

use crate::error::PipelineError;
use crate::types::{ExifMap, GpsInfo, GpsValue, TagValue};

// IFD pointer tags are structural group markers, not metadata; their
// sub-tags are lifted out instead.
const EXIF_IFD_POINTER: u16 = 0x8769;
const GPS_IFD_POINTER: u16 = 0x8825;
const INTEROP_IFD_POINTER: u16 = 0xa005;

/// Extracts and normalizes EXIF metadata from image bytes.
pub struct ExifExtractor;

impl ExifExtractor {
    /// Extract the normalized EXIF map and the GPS sub-map.
    ///
    /// An image with no EXIF block yields `PipelineError::NoMetadata`;
    /// a block that exists but cannot be parsed yields
    /// `PipelineError::Metadata`.
    pub fn extract(bytes: &[u8], path: &Path) -> Result<(ExifMap, GpsInfo), PipelineError> {
        let mut cursor = Cursor::new(bytes);
        let exif = match Reader::new().read_from_container(&mut cursor) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => {
                return Err(PipelineError::NoMetadata {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                return Err(PipelineError::Metadata {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        Ok(Self::split_fields(&exif))
    }

    /// Split parsed fields into the normalized map and the GPS sub-map.
    fn split_fields(exif: &Exif) -> (ExifMap, GpsInfo) {
        let mut tags = ExifMap::new();
        let mut gps = GpsInfo::new();

        for field in exif.fields() {
            // Thumbnail-IFD duplicates are not interesting here
            if field.ifd_num != In::PRIMARY {
                continue;
            }
            if is_ifd_pointer(field) {
                continue;
            }

            let name = field.tag.to_string();
            if field.tag.0 == Context::Gps {
                gps.insert(name, gps_value(field));
            } else if let Some(value) = normalize(&field.value) {
                tags.insert(name, value);
            }
        }

        (tags, gps)
    }
}

fn is_ifd_pointer(field: &Field) -> bool {
    field.tag.0 == Context::Tiff
        && matches!(
            field.tag.1,
            EXIF_IFD_POINTER | GPS_IFD_POINTER | INTEROP_IFD_POINTER
        )
}

/// Keep a GPS sub-tag raw: rational triples stay as (num, denom) pairs,
/// refs stay as text, anything else is carried as its display string.
fn gps_value(field: &Field) -> GpsValue {
    match &field.value {
        Value::Rational(v) => GpsValue::Rationals(v.iter().map(|r| (r.num, r.denom)).collect()),
        Value::Ascii(strings) => match strings.first().and_then(|bytes| decode_text(bytes)) {
            Some(text) => GpsValue::Text(text),
            None => GpsValue::Text(field.display_value().to_string()),
        },
        _ => GpsValue::Text(field.display_value().to_string()),
    }
}

/// Normalize a raw value into a JSON-serializable one.
///
/// Returns `None` when the tag should be dropped: byte runs that fail
/// UTF-8 decoding, and value types with no sensible plain form.
fn normalize(value: &Value) -> Option<TagValue> {
    match value {
        Value::Ascii(strings) => {
            let mut texts = Vec::with_capacity(strings.len());
            for bytes in strings {
                texts.push(TagValue::Text(decode_text(bytes)?));
            }
            collapse(texts)
        }
        Value::Byte(bytes) => decode_text(bytes).map(TagValue::Text),
        Value::Undefined(bytes, _) => decode_text(bytes).map(TagValue::Text),
        Value::Short(v) => collapse(v.iter().map(|&n| TagValue::Int(i64::from(n))).collect()),
        Value::Long(v) => collapse(v.iter().map(|&n| TagValue::Int(i64::from(n))).collect()),
        Value::SByte(v) => collapse(v.iter().map(|&n| TagValue::Int(i64::from(n))).collect()),
        Value::SShort(v) => collapse(v.iter().map(|&n| TagValue::Int(i64::from(n))).collect()),
        Value::SLong(v) => collapse(v.iter().map(|&n| TagValue::Int(i64::from(n))).collect()),
        Value::Rational(v) => collapse(v.iter().map(|r| TagValue::Float(r.to_f64())).collect()),
        Value::SRational(v) => collapse(v.iter().map(|r| TagValue::Float(r.to_f64())).collect()),
        Value::Float(v) => collapse(v.iter().map(|&x| TagValue::Float(f64::from(x))).collect()),
        Value::Double(v) => collapse(v.iter().map(|&x| TagValue::Float(x)).collect()),
        _ => None,
    }
}

fn decode_text(bytes: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(bytes).ok()?;
    Some(text.trim_end_matches('\0').to_string())
}

fn collapse(mut items: Vec<TagValue>) -> Option<TagValue> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        _ => Some(TagValue::List(items)),
    }
}
