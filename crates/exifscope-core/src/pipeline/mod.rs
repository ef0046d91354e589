//! The inspection pipeline: validation, decoding, EXIF extraction and
//! normalization, GPS resolution, timestamp analysis, content hashing,
//! and the steganography check.

mod decode;
mod exif;
mod gps;
mod hash;
mod inspect;
pub mod stego;
mod timestamps;
mod validate;

pub use decode::{format_to_string, DecodedImage, ImageDecoder};
pub use exif::ExifExtractor;
pub use gps::resolve_coordinates;
pub use hash::Hasher;
pub use inspect::{InspectOptions, Inspector};
pub use stego::StegoError;
pub use timestamps::analyze_timestamps;
pub use validate::Validator;
