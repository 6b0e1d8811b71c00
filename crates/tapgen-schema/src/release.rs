//! Release metadata supplied by the release pipeline.

use crate::arch::Arch;
use crate::digest::{DigestError, Sha256Digest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// A downloadable artifact for one architecture: where to fetch it and
/// what checksum the download must match.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    /// Download URL for the prebuilt binary archive
    pub url: String,

    /// SHA256 checksum of the archive
    pub sha256: String,
}

impl ArtifactRef {
    /// The checksum as a validated, lowercase digest.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError`] if the stored string is not 64 hex chars.
    pub fn digest(&self) -> Result<Sha256Digest, DigestError> {
        Sha256Digest::new(&self.sha256)
    }
}

/// The substitution values for one release, as produced by the release
/// pipeline. Constructed once per release and never mutated.
///
/// Carries one [`ArtifactRef`] per supported architecture; both entries
/// must be present, which [`validate`](Self::validate) enforces before
/// any rendering takes place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReleaseMetadata {
    /// One-line human description of the tool
    pub description: String,

    /// Canonical project location (e.g. the GitHub repository)
    pub homepage: String,

    /// Release version. Opaque: displayed and compared, never parsed.
    pub version: String,

    /// Per-architecture download artifacts, keyed by architecture tag
    pub artifacts: BTreeMap<Arch, ArtifactRef>,
}

/// Errors that can occur when validating [`ReleaseMetadata`].
///
/// All variants are permanent input-contract violations: retrying
/// cannot succeed without the caller supplying corrected input.
#[derive(thiserror::Error, Debug)]
pub enum ValidateError {
    /// A required field is empty or absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A checksum is not a well-formed SHA-256 digest.
    #[error("malformed digest in {field}: {source}")]
    MalformedDigest {
        /// Dotted path of the offending field (e.g. `artifacts.x86_64.sha256`).
        field: String,
        /// What was wrong with the digest string.
        #[source]
        source: DigestError,
    },

    /// A URL does not parse as an absolute HTTPS URL.
    #[error("malformed URL in {field}: {reason}")]
    MalformedUri {
        /// Dotted path of the offending field (e.g. `artifacts.arm64.url`).
        field: String,
        /// Parser diagnostic or the offending scheme.
        reason: String,
    },
}

impl ReleaseMetadata {
    /// Validates the metadata by checking all required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::MissingField`] if `description`,
    /// `homepage`, `version`, or either architecture's entry is empty
    /// or absent, [`ValidateError::MalformedUri`] if a URL does not
    /// parse as absolute HTTPS, or [`ValidateError::MalformedDigest`]
    /// if a checksum is not 64 hex characters.
    pub fn validate(&self) -> Result<(), ValidateError> {
        if self.description.is_empty() {
            return Err(ValidateError::MissingField("description".to_string()));
        }
        if self.homepage.is_empty() {
            return Err(ValidateError::MissingField("homepage".to_string()));
        }
        check_url("homepage", &self.homepage)?;
        if self.version.is_empty() {
            return Err(ValidateError::MissingField("version".to_string()));
        }

        for arch in Arch::ALL {
            let Some(artifact) = self.artifacts.get(&arch) else {
                return Err(ValidateError::MissingField(format!("artifacts.{arch}")));
            };

            if artifact.url.is_empty() {
                return Err(ValidateError::MissingField(format!("artifacts.{arch}.url")));
            }
            check_url(&format!("artifacts.{arch}.url"), &artifact.url)?;

            if artifact.sha256.is_empty() {
                return Err(ValidateError::MissingField(format!(
                    "artifacts.{arch}.sha256"
                )));
            }
            artifact
                .digest()
                .map_err(|source| ValidateError::MalformedDigest {
                    field: format!("artifacts.{arch}.sha256"),
                    source,
                })?;
        }

        Ok(())
    }

    /// The artifact for one architecture, if declared.
    pub fn artifact(&self, arch: Arch) -> Option<&ArtifactRef> {
        self.artifacts.get(&arch)
    }
}

/// Require an absolute HTTPS URL. Everything the formula points at is
/// fetched over the network, so plain `http` and relative URLs are
/// both contract violations.
fn check_url(field: &str, s: &str) -> Result<(), ValidateError> {
    let parsed = Url::parse(s).map_err(|e| ValidateError::MalformedUri {
        field: field.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "https" {
        return Err(ValidateError::MalformedUri {
            field: field.to_string(),
            reason: format!("expected https, got scheme '{}'", parsed.scheme()),
        });
    }

    Ok(())
}
