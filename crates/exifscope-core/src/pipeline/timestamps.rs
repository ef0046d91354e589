//! Timestamp consistency analysis.

use crate::types::{ExifMap, TagValue, TimestampReport};

/// Compare the three EXIF timestamp fields for evidence of post-capture
/// modification.
///
/// Values are reported raw. The warning is a plain string inequality
/// between the original and modified fields when both are present;
/// ordering and formatting are not interpreted.
pub fn analyze_timestamps(exif: &ExifMap) -> TimestampReport {
    let field = |name: &str| {
        exif.get(name)
            .and_then(TagValue::as_text)
            .map(str::to_string)
    };

    let original = field("DateTimeOriginal");
    let digitized = field("DateTimeDigitized");
    let modified = field("DateTime");

    let modified_after_capture = match (&original, &modified) {
        (Some(original), Some(modified)) => original != modified,
        _ => false,
    };

    TimestampReport {
        original,
        digitized,
        modified,
        modified_after_capture,
    }
}
