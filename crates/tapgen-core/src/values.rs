//! Loading release metadata from disk.
//!
//! The release pipeline writes the substitution values for one release
//! to a TOML file; this module reads it back into a
//! [`ReleaseMetadata`]. Parsing alone does not guarantee validity --
//! callers still go through [`ReleaseMetadata::validate`] (the
//! renderer does this itself).

use anyhow::{Context, Result};
use std::path::Path;
use tapgen_schema::ReleaseMetadata;

/// Load and parse a [`ReleaseMetadata`] from the given TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if its contents are
/// not valid TOML conforming to the metadata schema.
pub fn load_metadata(path: &Path) -> Result<ReleaseMetadata> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let meta: ReleaseMetadata =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), version = %meta.version, "loaded release metadata");
    Ok(meta)
}
