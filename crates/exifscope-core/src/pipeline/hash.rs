//! Content hashing for file integrity.

use blake3::Hasher as Blake3Hasher;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

const CHUNK_SIZE: usize = 4096;

/// Computes the integrity digest of the original file bytes.
///
/// The digest covers the byte stream as uploaded, not the decoded
/// image, so re-encoding or metadata stripping always changes it.
pub struct Hasher;

impl Hasher {
    /// Generate a BLAKE3 digest of a seekable stream as lowercase hex.
    ///
    /// The stream is rewound first, so the caller's read position does
    /// not affect the result.
    pub fn digest<R: Read + Seek>(reader: &mut R) -> io::Result<String> {
        reader.seek(SeekFrom::Start(0))?;
        let mut hasher = Blake3Hasher::new();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            hasher.update(&chunk[..n]);
        }
        Ok(hasher.finalize().to_hex().to_string())
    }

    /// Generate the digest of a file on disk.
    pub fn digest_file(path: &Path) -> io::Result<String> {
        let mut file = File::open(path)?;
        Self::digest(&mut file)
    }
}
