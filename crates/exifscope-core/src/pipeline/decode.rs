//! Image decoding with format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::PipelineError;

/// Result of decoding an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded pixel data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

/// Decodes uploaded bytes into a raster image.
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode an image from an in-memory byte buffer.
    ///
    /// The format is detected from the content, with the file extension
    /// as a fallback. The same buffer is reused downstream for hashing,
    /// so the file is only read once.
    pub fn decode_bytes(bytes: &[u8], path: &Path) -> Result<DecodedImage, PipelineError> {
        let file_size = bytes.len() as u64;
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => {
                ImageFormat::from_path(path).map_err(|_| PipelineError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    format: path
                        .extension()
                        .and_then(|e| e.to_str())
                        .unwrap_or("unknown")
                        .to_string(),
                })?
            }
        };
        let image = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_format_to_string() {
        assert_eq!(format_to_string(ImageFormat::Jpeg), "jpeg");
        assert_eq!(format_to_string(ImageFormat::Png), "png");
    }

    #[test]
    fn test_decode_png_bytes() {
        let mut bytes = Vec::new();
        RgbImage::new(4, 3)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = ImageDecoder::decode_bytes(&bytes, Path::new("test.png")).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (4, 3));
        assert_eq!(decoded.file_size, bytes.len() as u64);
    }

    #[test]
    fn test_format_detected_by_content() {
        // PNG bytes behind a .jpg name decode as PNG
        let mut bytes = Vec::new();
        RgbImage::new(2, 2)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = ImageDecoder::decode_bytes(&bytes, Path::new("misnamed.jpg")).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = ImageDecoder::decode_bytes(b"not an image", Path::new("junk.jpg")).unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }
}
