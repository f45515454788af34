//! Digest algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;

/// A supported content digest algorithm.
///
/// # Examples
///
/// ```
/// use registry_digest::Algorithm;
///
/// let alg: Algorithm = "sha512".parse().unwrap();
/// assert_eq!(alg, Algorithm::Sha512);
/// assert_eq!(alg.hex_len(), 128);
/// assert!("md5".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl Algorithm {
    /// The algorithm assumed for bare content ids.
    pub const CANONICAL: Self = Self::Sha256;

    /// Every supported algorithm.
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// Returns the algorithm identifier as written in a digest.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Returns the number of hex characters in a digest of this algorithm.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| DigestError::UnsupportedAlgorithm {
                algorithm: s.to_string(),
            })
    }
}
