//! Least-significant-bit steganography extraction.
//!
//! Payload layout: one bit per RGB channel byte in row-major order,
//! MSB first — a 32-bit big-endian length header followed by that many
//! UTF-8 payload bytes. Images not encoded via this scheme typically
//! declare a length past the end of the pixel data, which is reported
//! as `OutOfRange` and treated by the caller as "nothing hidden".

use image::DynamicImage;
use thiserror::Error;

const LENGTH_BITS: usize = 32;

/// Faults the extractor can hit.
#[derive(Error, Debug)]
pub enum StegoError {
    /// The declared payload runs past the end of the pixel data. This is
    /// the expected outcome for images with no embedded payload.
    #[error("payload range exceeds pixel data ({needed} bits needed, {available} available)")]
    OutOfRange { needed: usize, available: usize },

    /// A payload was extracted but is not valid UTF-8
    #[error("hidden payload is not valid UTF-8: {0}")]
    InvalidPayload(#[from] std::string::FromUtf8Error),
}

/// Attempt to extract a hidden message from the image's pixel data.
///
/// Returns `Ok(None)` when the length header is zero (nothing
/// embedded).
pub fn reveal(image: &DynamicImage) -> Result<Option<String>, StegoError> {
    let channels = image.to_rgb8();
    decode_channels(channels.as_raw())
}

fn decode_channels(raw: &[u8]) -> Result<Option<String>, StegoError> {
    // One payload bit per channel byte
    let available = raw.len();
    if available < LENGTH_BITS {
        return Err(StegoError::OutOfRange {
            needed: LENGTH_BITS,
            available,
        });
    }

    let mut length: u32 = 0;
    for &channel in &raw[..LENGTH_BITS] {
        length = (length << 1) | u32::from(channel & 1);
    }
    if length == 0 {
        return Ok(None);
    }

    let needed = LENGTH_BITS + (length as usize).saturating_mul(8);
    if needed > available {
        return Err(StegoError::OutOfRange { needed, available });
    }

    let mut payload = Vec::with_capacity(length as usize);
    for chunk in raw[LENGTH_BITS..needed].chunks_exact(8) {
        let mut byte = 0u8;
        for &channel in chunk {
            byte = (byte << 1) | (channel & 1);
        }
        payload.push(byte);
    }

    Ok(Some(String::from_utf8(payload)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Write the length header and payload bytes into the channel LSBs
    /// of a fresh image.
    fn embed_bytes(width: u32, height: u32, payload: &[u8]) -> DynamicImage {
        let mut bits = Vec::with_capacity(LENGTH_BITS + payload.len() * 8);
        let length = payload.len() as u32;
        for i in (0..LENGTH_BITS).rev() {
            bits.push(((length >> i) & 1) as u8);
        }
        for byte in payload {
            for i in (0..8).rev() {
                bits.push((byte >> i) & 1);
            }
        }

        let mut img = RgbImage::new(width, height);
        assert!(bits.len() <= img.len(), "test image too small for payload");
        for (channel, bit) in img.iter_mut().zip(bits) {
            *channel = (*channel & !1) | bit;
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_payload_roundtrip() {
        let image = embed_bytes(32, 32, "meet at dawn".as_bytes());
        let revealed = reveal(&image).unwrap();
        assert_eq!(revealed.as_deref(), Some("meet at dawn"));
    }

    #[test]
    fn test_blank_image_has_no_payload() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(16, 16));
        assert!(reveal(&image).unwrap().is_none());
    }

    #[test]
    fn test_unencoded_image_reports_out_of_range() {
        // Saturated pixels decode as a length of u32::MAX, far past the
        // pixel data — the usual case for ordinary photographs.
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([255, 255, 255])));
        let err = reveal(&image).unwrap_err();
        assert!(matches!(err, StegoError::OutOfRange { .. }));
    }

    #[test]
    fn test_image_smaller_than_header_reports_out_of_range() {
        // 3x3 RGB has 27 channel bytes, fewer than the 32 header bits
        let image = DynamicImage::ImageRgb8(RgbImage::new(3, 3));
        let err = reveal(&image).unwrap_err();
        assert!(matches!(
            err,
            StegoError::OutOfRange {
                needed: 32,
                available: 27
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_payload_is_an_error() {
        let image = embed_bytes(16, 16, &[0xff, 0xfe, 0x01]);
        let err = reveal(&image).unwrap_err();
        assert!(matches!(err, StegoError::InvalidPayload(_)));
    }

    #[test]
    fn test_embedding_survives_other_bits() {
        // Set high bits on every channel; only LSBs carry payload
        let image = embed_bytes(32, 32, b"still here");
        let mut rgb = image.to_rgb8();
        for channel in rgb.iter_mut() {
            *channel |= 0b1010_1010;
        }
        let noisy = DynamicImage::ImageRgb8(rgb);
        assert_eq!(reveal(&noisy).unwrap().as_deref(), Some("still here"));
    }
}
