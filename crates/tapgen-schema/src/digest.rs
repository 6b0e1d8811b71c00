//! SHA-256 digest newtype with validation at construction.

use serde::{Deserialize, Deserializer, Serialize};

/// Why a digest string was rejected.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DigestError {
    /// Not exactly 64 characters long.
    #[error("expected 64 hex characters, got {0}")]
    BadLength(usize),

    /// Contains characters outside `[0-9a-fA-F]`.
    #[error("contains non-hex characters")]
    NonHex,
}

/// A validated SHA-256 digest (64 hex characters, stored lowercase).
///
/// The newtype ensures a malformed hex string can never propagate into
/// a rendered formula, where Homebrew would reject every install with
/// a confusing checksum-mismatch error. Validation happens at
/// construction and at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    /// Create a new `Sha256Digest`, validating the input.
    ///
    /// Accepts strings with or without a `sha256:` prefix and
    /// normalizes to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError`] if the hex portion is not exactly 64
    /// ASCII hex characters.
    pub fn new(s: impl Into<String>) -> Result<Self, DigestError> {
        let s = s.into();
        let hex = s.strip_prefix("sha256:").unwrap_or(&s);

        if hex.len() != 64 {
            return Err(DigestError::BadLength(hex.len()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DigestError::NonHex);
        }

        Ok(Self(hex.to_lowercase()))
    }

    /// Get the digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sha256Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2";

    #[test]
    fn accepts_64_hex() {
        let d = Sha256Digest::new(GOOD).unwrap();
        assert_eq!(d.as_str(), GOOD);
    }

    #[test]
    fn strips_prefix_and_lowercases() {
        let d = Sha256Digest::new(format!("sha256:{}", GOOD.to_uppercase())).unwrap();
        assert_eq!(d.as_str(), GOOD);
    }

    #[test]
    fn rejects_short() {
        assert_eq!(
            Sha256Digest::new(&GOOD[..63]).unwrap_err(),
            DigestError::BadLength(63)
        );
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("{}zz", &GOOD[..62]);
        assert_eq!(Sha256Digest::new(bad).unwrap_err(), DigestError::NonHex);
    }
}
