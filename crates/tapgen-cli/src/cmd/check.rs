//! Check command

use anyhow::{Context, Result};
use std::path::Path;
use tapgen_schema::Arch;

/// Validate a release metadata file and print a summary.
pub fn check(metadata: &Path) -> Result<()> {
    let meta =
        tapgen_core::values::load_metadata(metadata).context("Failed to parse metadata")?;
    meta.validate().context("Invalid release metadata")?;

    println!("✓ Metadata is valid");
    println!("  Version: {}", meta.version);
    println!("  Homepage: {}", meta.homepage);

    let arch = Arch::current();
    if let Some(artifact) = meta.artifact(arch) {
        println!("  Artifact: {} ({arch})", artifact.url);
    }

    Ok(())
}
