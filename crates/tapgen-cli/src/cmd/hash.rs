//! Hash command

use anyhow::Result;
use std::path::PathBuf;

/// Compute SHA256 hash of files
pub fn hash(files: &[PathBuf]) -> Result<()> {
    for file in files {
        let digest = tapgen_core::digest::file_sha256(file)?;
        println!("{digest} {}", file.display());
    }
    Ok(())
}
