//! Error types for digest parsing.

use crate::algorithm::Algorithm;

/// Errors that can occur when parsing or validating a digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    /// The input is not of the form `<algorithm>:<hex>`.
    #[error("invalid digest format '{input}'; expected '<algorithm>:<hex>'")]
    InvalidFormat {
        /// The rejected input
        input: String,
    },
    /// The algorithm is not one of the supported SHA-2 variants.
    #[error("unsupported digest algorithm '{algorithm}'")]
    UnsupportedAlgorithm {
        /// The algorithm that was found
        algorithm: String,
    },
    /// The hex portion has the wrong length for its algorithm.
    #[error("{algorithm} digest must have {expected} hex characters, found {actual}")]
    InvalidLength {
        /// The algorithm the length was checked against
        algorithm: Algorithm,
        /// Required hex length
        expected: usize,
        /// Actual hex length
        actual: usize,
    },
    /// The hex portion contains a character outside `[a-f0-9]`.
    #[error("invalid hex character '{char}' at position {position}; only [a-f0-9] allowed")]
    InvalidHex {
        /// The invalid character
        char: char,
        /// Position within the hex portion
        position: usize,
    },
}

impl DigestError {
    /// Creates an `InvalidFormat` error.
    #[must_use]
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}
