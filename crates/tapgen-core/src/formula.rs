//! Homebrew formula rendering.
//!
//! A formula is rendered from two inputs: the per-release
//! [`ReleaseMetadata`] (description, homepage, version, artifacts) and
//! the fixed [`FormulaSkeleton`] (class name, runtime dependencies,
//! the binary to install). Rendering is deterministic and atomic --
//! validation runs first and no partial document is ever produced.
//!
//! Architecture selection is NOT done here. The formula carries one
//! guarded block per architecture and Homebrew evaluates the guards on
//! the installing machine, so exactly one block's `url`/`sha256` pair
//! is in effect per install.

use tapgen_schema::{Arch, ReleaseMetadata, Sha256Digest, ValidateError};

/// The fixed, non-templated parts of a formula: everything that stays
/// the same from release to release.
#[derive(Debug, Clone)]
pub struct FormulaSkeleton {
    /// Tool name as installed (also the formula file stem).
    pub name: String,
    /// Ruby class name of the formula (`sad` -> `Sad`).
    pub class_name: String,
    /// Packages that must be installed before the tool is usable.
    pub depends_on: Vec<String>,
}

impl FormulaSkeleton {
    /// Build a skeleton for `name`, deriving the Ruby class name and
    /// installing the binary under `name` itself.
    pub fn new(name: &str, depends_on: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.to_string(),
            class_name: camelize(name),
            depends_on: depends_on.into_iter().map(Into::into).collect(),
        }
    }
}

/// Homebrew's CamelCase class-name convention: `git-delta` -> `GitDelta`.
fn camelize(name: &str) -> String {
    name.split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// A rendered formula document. Immutable once produced; callers only
/// read or write it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifest(String);

impl RenderedManifest {
    /// The formula text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RenderedManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The CPU-family predicate guarding one architecture's block. The
/// predicate is evaluated by Homebrew at install time, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuPredicate {
    Arm,
    Intel,
}

impl CpuPredicate {
    fn for_arch(arch: Arch) -> Self {
        match arch {
            Arch::Arm64 => Self::Arm,
            Arch::X86_64 => Self::Intel,
        }
    }

    fn ruby_test(self) -> &'static str {
        match self {
            Self::Arm => "Hardware::CPU.arm?",
            Self::Intel => "Hardware::CPU.intel?",
        }
    }
}

/// One architecture's install branch: a predicate plus the directives
/// it guards. New architectures become new entries in this list; the
/// emission loop below never changes.
#[derive(Debug)]
struct GuardedBlock {
    predicate: CpuPredicate,
    url: String,
    sha256: Sha256Digest,
}

/// Render `meta` into a Homebrew formula using the fixed `skeleton`.
///
/// The output contains the description, homepage, and version
/// verbatim, one guarded `url`/`sha256` block per architecture (arm64
/// first), an `else` branch that aborts installation on any other CPU
/// family, the skeleton's `depends_on` lines, and an `install` method
/// placing the binary on the user's PATH.
///
/// # Errors
///
/// Returns [`ValidateError`] if any metadata field is missing, a
/// digest is not 64 hex characters, or a URL is not absolute HTTPS.
/// Fails before emitting anything; no partial document is returned.
pub fn render(
    meta: &ReleaseMetadata,
    skeleton: &FormulaSkeleton,
) -> Result<RenderedManifest, ValidateError> {
    meta.validate()?;

    let mut blocks = Vec::with_capacity(Arch::ALL.len());
    for arch in Arch::ALL {
        let artifact = meta
            .artifact(arch)
            .ok_or_else(|| ValidateError::MissingField(format!("artifacts.{arch}")))?;
        let sha256 = artifact
            .digest()
            .map_err(|source| ValidateError::MalformedDigest {
                field: format!("artifacts.{arch}.sha256"),
                source,
            })?;
        blocks.push(GuardedBlock {
            predicate: CpuPredicate::for_arch(arch),
            url: artifact.url.clone(),
            sha256,
        });
    }

    Ok(RenderedManifest(emit(meta, skeleton, &blocks)))
}

fn emit(meta: &ReleaseMetadata, skeleton: &FormulaSkeleton, blocks: &[GuardedBlock]) -> String {
    let mut out = String::new();

    out.push_str("# frozen_string_literal: true\n\n");
    out.push_str(&format!("class {} < Formula\n", skeleton.class_name));
    out.push_str(&format!("  desc {}\n", ruby_str(&meta.description)));
    out.push_str(&format!("  homepage {}\n", ruby_str(&meta.homepage)));
    out.push_str(&format!("  version {}\n\n", ruby_str(&meta.version)));

    for (i, block) in blocks.iter().enumerate() {
        let keyword = if i == 0 { "if" } else { "elsif" };
        out.push_str(&format!("  {keyword} {}\n", block.predicate.ruby_test()));
        out.push_str(&format!("    url {}\n", ruby_str(&block.url)));
        out.push_str(&format!("    sha256 {}\n", ruby_str(block.sha256.as_str())));
    }
    // Unsupported CPU families abort loudly instead of producing a
    // formula with no url.
    out.push_str("  else\n");
    out.push_str(&format!(
        "    odie {}\n",
        ruby_str(&format!("{}: unsupported CPU architecture", skeleton.name))
    ));
    out.push_str("  end\n\n");

    for dep in &skeleton.depends_on {
        out.push_str(&format!("  depends_on {}\n", ruby_str(dep)));
    }
    if !skeleton.depends_on.is_empty() {
        out.push('\n');
    }

    out.push_str("  def install\n");
    out.push_str(&format!("    bin.install {}\n", ruby_str(&skeleton.name)));
    out.push_str("  end\n");
    out.push_str("end\n");

    out
}

/// Single-quoted Ruby string literal. Only `\` and `'` need escaping.
fn ruby_str(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tapgen_schema::ArtifactRef;

    const ARM_SHA: &str = "a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2a1b2";
    const X86_SHA: &str = "c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4c3d4";

    fn skeleton() -> FormulaSkeleton {
        FormulaSkeleton::new("sad", ["fzf", "git-delta"])
    }

    fn sample() -> ReleaseMetadata {
        ReleaseMetadata {
            description: "cache for sad".to_string(),
            homepage: "https://example.com/sad".to_string(),
            version: "1.2.3".to_string(),
            artifacts: BTreeMap::from([
                (
                    Arch::Arm64,
                    ArtifactRef {
                        url: "https://dl.example.com/sad-1.2.3-arm64.tar.gz".to_string(),
                        sha256: ARM_SHA.to_string(),
                    },
                ),
                (
                    Arch::X86_64,
                    ArtifactRef {
                        url: "https://dl.example.com/sad-1.2.3-x86_64.tar.gz".to_string(),
                        sha256: X86_SHA.to_string(),
                    },
                ),
            ]),
        }
    }

    #[test]
    fn deterministic() {
        let a = render(&sample(), &skeleton()).unwrap();
        let b = render(&sample(), &skeleton()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn contains_metadata_verbatim() {
        let out = render(&sample(), &skeleton()).unwrap();
        let text = out.as_str();
        assert!(text.contains("desc 'cache for sad'"));
        assert!(text.contains("homepage 'https://example.com/sad'"));
        assert_eq!(text.matches("version '1.2.3'").count(), 1);
    }

    #[test]
    fn both_arch_blocks_present_and_not_swapped() {
        let out = render(&sample(), &skeleton()).unwrap();
        let text = out.as_str();

        let arm_guard = text.find("if Hardware::CPU.arm?").unwrap();
        let intel_guard = text.find("elsif Hardware::CPU.intel?").unwrap();
        assert!(arm_guard < intel_guard);

        // Each pair sits inside its own guard.
        let arm_section = &text[arm_guard..intel_guard];
        let intel_section = &text[intel_guard..];
        assert!(arm_section.contains("sad-1.2.3-arm64.tar.gz"));
        assert!(arm_section.contains(ARM_SHA));
        assert!(!arm_section.contains(X86_SHA));
        assert!(intel_section.contains("sad-1.2.3-x86_64.tar.gz"));
        assert!(intel_section.contains(X86_SHA));
        assert!(!intel_section.contains(ARM_SHA));
    }

    #[test]
    fn unsupported_cpu_aborts() {
        let out = render(&sample(), &skeleton()).unwrap();
        assert!(
            out.as_str()
                .contains("odie 'sad: unsupported CPU architecture'")
        );
    }

    #[test]
    fn declares_dependencies_and_install() {
        let out = render(&sample(), &skeleton()).unwrap();
        let text = out.as_str();
        assert!(text.contains("depends_on 'fzf'"));
        assert!(text.contains("depends_on 'git-delta'"));
        assert!(text.contains("bin.install 'sad'"));
        assert!(text.contains("class Sad < Formula"));
    }

    #[test]
    fn missing_field_fails_atomically() {
        let mut meta = sample();
        meta.version.clear();
        let err = render(&meta, &skeleton()).unwrap_err();
        assert!(matches!(err, ValidateError::MissingField(ref f) if f == "version"));
    }

    #[test]
    fn short_x86_digest_rejected_before_rendering() {
        let mut meta = sample();
        meta.artifacts.get_mut(&Arch::X86_64).unwrap().sha256 = X86_SHA[..63].to_string();
        match render(&meta, &skeleton()).unwrap_err() {
            ValidateError::MalformedDigest { field, .. } => {
                assert_eq!(field, "artifacts.x86_64.sha256");
            }
            other => panic!("expected MalformedDigest, got {other:?}"),
        }
    }

    #[test]
    fn quotes_in_description_are_escaped() {
        let mut meta = sample();
        meta.description = "it's sad".to_string();
        let out = render(&meta, &skeleton()).unwrap();
        assert!(out.as_str().contains(r"desc 'it\'s sad'"));
    }

    #[test]
    fn camelize_handles_separators() {
        assert_eq!(camelize("sad"), "Sad");
        assert_eq!(camelize("git-delta"), "GitDelta");
        assert_eq!(camelize("some_tool"), "SomeTool");
    }
}
