//! Disambiguation between content identifiers and references.

use std::fmt;
use std::str::FromStr;

use registry_digest::{Algorithm, Digest, validate_hex};
use tracing::debug;

use crate::error::{ParseError, ParseErrorKind};
use crate::reference::Reference;

/// The result of [`parse_id_or_reference`]: either a content identifier or a
/// named reference, never both.
///
/// # Examples
///
/// ```
/// use registry_reference::{IdOrReference, parse_id_or_reference};
///
/// let hex = "1a3f5e7d9c1b3a5f7e9d1c3b5a7f9e1d3c5b7a9f1e3d5d7c9b1a3f5e7d9c1b3a";
/// let parsed = parse_id_or_reference(hex).unwrap();
/// assert_eq!(parsed.id().map(|d| d.hex()), Some(hex));
///
/// let parsed = parse_id_or_reference("ubuntu:22.04").unwrap();
/// assert!(matches!(parsed, IdOrReference::Reference(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdOrReference {
    /// A content identifier
    Id(Digest),
    /// A named reference
    Reference(Reference),
}

impl IdOrReference {
    /// Returns the content identifier, if this is one.
    #[must_use]
    pub const fn id(&self) -> Option<&Digest> {
        match self {
            Self::Id(digest) => Some(digest),
            Self::Reference(_) => None,
        }
    }

    /// Returns the reference, if this is one.
    #[must_use]
    pub const fn reference(&self) -> Option<&Reference> {
        match self {
            Self::Id(_) => None,
            Self::Reference(reference) => Some(reference),
        }
    }

    /// Returns true if this is a content identifier.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

/// Interprets user input as either a content identifier or a reference.
///
/// A bare 64-character lowercase hex string is read as a `sha256` identifier.
/// Input that already parses as `algorithm:hex` is an identifier as well.
/// Everything else must parse as a [`Reference`].
///
/// # Errors
///
/// Returns `ParseError` if the input is neither an identifier nor a valid
/// reference. The error describes the reference parse failure.
pub fn parse_id_or_reference(input: &str) -> Result<IdOrReference, ParseError> {
    if validate_hex(input).is_ok() {
        debug!(input, "bare hex input; reading as content id");
        return Digest::parse(&format!("{}:{input}", Algorithm::CANONICAL))
            .map(IdOrReference::Id)
            .map_err(|err| ParseError {
                input: input.to_string(),
                kind: ParseErrorKind::InvalidDigest(err),
            });
    }

    if let Ok(digest) = Digest::parse(input) {
        debug!(input, "digest input; reading as content id");
        return Ok(IdOrReference::Id(digest));
    }

    debug!(input, "reading as reference");
    Reference::parse(input).map(IdOrReference::Reference)
}

impl fmt::Display for IdOrReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(digest) => write!(f, "{digest}"),
            Self::Reference(reference) => write!(f, "{reference}"),
        }
    }
}

impl FromStr for IdOrReference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id_or_reference(s)
    }
}

impl From<Digest> for IdOrReference {
    fn from(digest: Digest) -> Self {
        Self::Id(digest)
    }
}

impl From<Reference> for IdOrReference {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}
