//! End-to-end pipeline tests over synthesized files.
//!
//! These run without a network: geocoding only happens when an image
//! carries a complete GPS block, and the fixtures here don't.

use exifscope_core::{Config, ExifScopeError, Inspector, PipelineError};
use std::path::Path;

fn inspector() -> Inspector {
    Inspector::new(&Config::default())
}

fn write_png(path: &Path) {
    image::RgbImage::new(8, 8).save(path).unwrap();
}

#[tokio::test]
async fn test_image_without_exif_halts_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.png");
    write_png(&path);

    let err = inspector().inspect(&path).await.unwrap_err();
    assert!(matches!(
        err,
        ExifScopeError::Pipeline(PipelineError::NoMetadata { .. })
    ));
}

#[tokio::test]
async fn test_missing_file_is_rejected_before_decode() {
    let err = inspector()
        .inspect(Path::new("/nonexistent/photo.jpg"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ExifScopeError::Pipeline(PipelineError::FileNotFound(_))
    ));
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.tiff");
    std::fs::write(&path, b"II*\x00").unwrap();

    let err = inspector().inspect(&path).await.unwrap_err();
    assert!(matches!(
        err,
        ExifScopeError::Pipeline(PipelineError::UnsupportedFormat { .. })
    ));
}

#[tokio::test]
async fn test_malformed_image_aborts_the_pass() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.jpg");
    std::fs::write(&path, b"\xff\xd8 definitely not a jpeg").unwrap();

    let err = inspector().inspect(&path).await.unwrap_err();
    assert!(matches!(
        err,
        ExifScopeError::Pipeline(PipelineError::Decode { .. })
    ));
}
