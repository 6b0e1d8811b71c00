//! Render command

use anyhow::{Context, Result};
use std::path::Path;
use tapgen_core::FormulaSkeleton;
use tapgen_schema::Arch;

/// Name of the installed binary. Fixed part of the formula skeleton.
const TOOL_NAME: &str = "sad";

/// Packages the tool needs at run time. Fixed, never templated.
const RUNTIME_DEPS: [&str; 2] = ["fzf", "git-delta"];

/// Render the formula for one release and write it out.
pub fn render(
    metadata: &Path,
    output: Option<&Path>,
    arm64_artifact: Option<&Path>,
    x86_64_artifact: Option<&Path>,
) -> Result<()> {
    let mut meta = tapgen_core::values::load_metadata(metadata)?;

    // Digests supplied as local artifact files take precedence over
    // whatever the metadata file carries.
    for (arch, artifact) in [(Arch::Arm64, arm64_artifact), (Arch::X86_64, x86_64_artifact)] {
        let Some(path) = artifact else { continue };
        let digest = tapgen_core::digest::file_sha256(path)?;
        let entry = meta.artifacts.get_mut(&arch).ok_or_else(|| {
            anyhow::anyhow!("metadata has no {arch} artifact to attach a digest to")
        })?;
        entry.sha256 = digest.as_str().to_string();
        tracing::info!(%arch, path = %path.display(), "computed artifact digest");
    }

    let skeleton = FormulaSkeleton::new(TOOL_NAME, RUNTIME_DEPS);
    let manifest = tapgen_core::render(&meta, &skeleton)?;

    match output {
        Some(path) => {
            std::fs::write(path, manifest.as_str())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote formula: {}", path.display());
        }
        None => print!("{manifest}"),
    }

    Ok(())
}
