//! SHA-256 hashing of release artifacts.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;
use tapgen_schema::Sha256Digest;

/// Compute the SHA-256 digest of a file (streaming).
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn file_sha256(path: &Path) -> Result<Sha256Digest> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 65536]; // 64KB buffer

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let digest = Sha256Digest::new(hex::encode(hasher.finalize()))?;
    Ok(digest)
}
