//! The digest value type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use sha2::Digest as _;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;
use crate::error::DigestError;

/// A validated content digest of the form `<algorithm>:<hex>`.
///
/// # Examples
///
/// ```
/// use registry_digest::{Algorithm, Digest};
///
/// let hex = "86e0e091d0da6bde2456dbb48306f3956bbeb2eae1b5b9a43045843f69fe4aaa";
/// let digest = Digest::parse(&format!("sha256:{hex}")).unwrap();
/// assert_eq!(digest.algorithm(), Algorithm::Sha256);
/// assert_eq!(digest.hex(), hex);
///
/// assert!(Digest::parse("foo").is_err());
/// assert!(Digest::parse("sha256:abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    /// Full `algorithm:hex` representation
    value: String,
}

impl Digest {
    /// Parses a digest from a string.
    ///
    /// # Errors
    ///
    /// Returns `DigestError` if:
    /// - The input has no `:` or an empty algorithm or hex part
    /// - The algorithm is not supported
    /// - The hex part has the wrong length for the algorithm
    /// - The hex part contains characters outside `[a-f0-9]`
    pub fn parse(input: &str) -> Result<Self, DigestError> {
        let Some((algorithm, hex)) = input.split_once(':') else {
            return Err(DigestError::invalid_format(input));
        };
        if algorithm.is_empty() || hex.is_empty() {
            return Err(DigestError::invalid_format(input));
        }

        let algorithm: Algorithm = algorithm.parse()?;
        check_hex(algorithm, hex)?;

        Ok(Self {
            algorithm,
            value: input.to_string(),
        })
    }

    /// Computes the digest of `bytes` with the given algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use registry_digest::{Algorithm, Digest};
    ///
    /// let digest = Digest::from_bytes(Algorithm::Sha256, b"");
    /// assert_eq!(
    ///     digest.as_str(),
    ///     "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    /// );
    /// ```
    #[must_use]
    pub fn from_bytes(algorithm: Algorithm, bytes: &[u8]) -> Self {
        let hex = match algorithm {
            Algorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
            Algorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
            Algorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        };
        Self {
            algorithm,
            value: format!("{algorithm}:{hex}"),
        }
    }

    /// Returns the digest algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the hex portion (without the algorithm prefix).
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.value[self.algorithm.as_str().len() + 1..]
    }

    /// Returns the full `algorithm:hex` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Validates a bare content id: exactly 64 lowercase hex characters.
///
/// # Errors
///
/// Returns `DigestError::InvalidLength` if the input is not 64 characters
/// long, or `DigestError::InvalidHex` if it contains characters outside
/// `[a-f0-9]`.
///
/// # Examples
///
/// ```
/// use registry_digest::validate_hex;
///
/// assert!(validate_hex(&"a".repeat(64)).is_ok());
/// assert!(validate_hex(&"A".repeat(64)).is_err());
/// assert!(validate_hex("abc").is_err());
/// ```
pub fn validate_hex(input: &str) -> Result<(), DigestError> {
    check_hex(Algorithm::CANONICAL, input)
}

fn check_hex(algorithm: Algorithm, hex: &str) -> Result<(), DigestError> {
    let expected = algorithm.hex_len();
    if hex.len() != expected {
        return Err(DigestError::InvalidLength {
            algorithm,
            expected,
            actual: hex.len(),
        });
    }

    for (i, c) in hex.chars().enumerate() {
        if !is_hex_char(c) {
            return Err(DigestError::InvalidHex {
                char: c,
                position: i,
            });
        }
    }

    Ok(())
}

const fn is_hex_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'a'..='f')
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl TryFrom<&str> for Digest {
    type Error = DigestError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Digest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Digest {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "86e0e091d0da6bde2456dbb48306f3956bbeb2eae1b5b9a43045843f69fe4aaa";

    #[test]
    fn parse_sha256() {
        let digest = Digest::parse(&format!("sha256:{HEX}")).unwrap();
        assert_eq!(digest.algorithm(), Algorithm::Sha256);
        assert_eq!(digest.hex(), HEX);
        assert_eq!(digest.to_string(), format!("sha256:{HEX}"));
    }

    #[test]
    fn parse_sha512() {
        let hex = "ab".repeat(64);
        let digest = Digest::parse(&format!("sha512:{hex}")).unwrap();
        assert_eq!(digest.algorithm(), Algorithm::Sha512);
        assert_eq!(digest.hex(), hex);
    }

    #[test]
    fn parse_without_colon_fails() {
        let result = Digest::parse("foo");
        assert!(matches!(result, Err(DigestError::InvalidFormat { .. })));
    }

    #[test]
    fn parse_empty_parts_fail() {
        assert!(matches!(
            Digest::parse(":abc"),
            Err(DigestError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Digest::parse("sha256:"),
            Err(DigestError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn parse_unsupported_algorithm_fails() {
        let result = Digest::parse(&format!("md5:{HEX}"));
        assert!(matches!(
            result,
            Err(DigestError::UnsupportedAlgorithm { ref algorithm }) if algorithm == "md5"
        ));
    }

    #[test]
    fn parse_wrong_length_fails() {
        let result = Digest::parse("sha256:abc");
        assert!(matches!(
            result,
            Err(DigestError::InvalidLength {
                expected: 64,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn parse_uppercase_hex_fails() {
        let upper = HEX.to_uppercase();
        let result = Digest::parse(&format!("sha256:{upper}"));
        assert!(matches!(
            result,
            Err(DigestError::InvalidHex { char: 'E', position: 2 })
        ));
    }

    #[test]
    fn validate_hex_accepts_content_id() {
        assert!(validate_hex(HEX).is_ok());
    }

    #[test]
    fn validate_hex_rejects_non_hex() {
        let name = "thisisthesongthatneverendsitgoesonandonandonthisisthesongthatnev";
        assert!(matches!(
            validate_hex(name),
            Err(DigestError::InvalidHex { char: 't', position: 0 })
        ));
    }

    #[test]
    fn from_bytes_matches_known_vector() {
        let digest = Digest::from_bytes(Algorithm::Sha256, b"abc");
        assert_eq!(
            digest.hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn from_bytes_output_reparses() {
        for alg in Algorithm::ALL {
            let digest = Digest::from_bytes(alg, b"layer");
            assert_eq!(Digest::parse(digest.as_str()).unwrap(), digest);
            assert_eq!(digest.hex().len(), alg.hex_len());
        }
    }

    #[test]
    fn ordering_follows_string_form() {
        let a = Digest::parse(&format!("sha256:{}", "0".repeat(64))).unwrap();
        let b = Digest::parse(&format!("sha256:{}", "f".repeat(64))).unwrap();
        assert!(a < b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let digest = Digest::parse(&format!("sha256:{HEX}")).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"sha256:{HEX}\""));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
