//! Main reference type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use registry_digest::Digest;
use tracing::debug;

use crate::canonical::Canonical;
use crate::error::{ParseError, ParseErrorKind};
use crate::name::Name;
use crate::named::Named;
use crate::tag::Tag;
use crate::tagged::Tagged;

/// A parsed and validated registry reference.
///
/// A reference is a repository name, optionally pinned by a tag or by a
/// content digest. It never carries both: when the input has a tag and a
/// digest, the digest wins and the tag is dropped.
///
/// # Structure
///
/// ```text
/// [hostname/]path-component[/path-component...][:tag][@algorithm:hex]
/// ```
///
/// # Examples
///
/// ```
/// use registry_reference::{Named, Reference};
///
/// let reference = Reference::parse("library/ubuntu:22.04").unwrap();
/// assert_eq!(reference.name(), "ubuntu");
/// assert_eq!(reference.full_name(), "docker.io/library/ubuntu");
/// assert_eq!(reference.tag().map(|t| t.as_str()), Some("22.04"));
/// assert_eq!(reference.to_string(), "ubuntu:22.04");
///
/// // Digest wins over tag
/// let reference = Reference::parse(
///     "busybox:latest@sha256:86e0e091d0da6bde2456dbb48306f3956bbeb2eae1b5b9a43045843f69fe4aaa",
/// ).unwrap();
/// assert!(reference.tag().is_none());
/// assert!(reference.digest().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// A bare repository name
    NameOnly(Name),
    /// A name pinned by tag
    Tagged(Tagged),
    /// A name pinned by digest
    Canonical(Canonical),
}

impl Reference {
    /// Parses a reference from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input has more than one `@`, or an empty name, tag, or digest
    /// - The name, tag, or digest fails validation
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Wraps a validated name in a reference carrying neither tag nor digest.
    #[must_use]
    pub const fn with_name(name: Name) -> Self {
        Self::NameOnly(name)
    }

    /// Returns the tag, if this reference is tagged.
    #[must_use]
    pub const fn tag(&self) -> Option<&Tag> {
        match self {
            Self::Tagged(tagged) => Some(tagged.tag()),
            _ => None,
        }
    }

    /// Returns the digest, if this reference is canonical.
    #[must_use]
    pub const fn digest(&self) -> Option<&Digest> {
        match self {
            Self::Canonical(canonical) => Some(canonical.digest()),
            _ => None,
        }
    }

    /// Returns true if the reference carries neither a tag nor a digest.
    #[must_use]
    pub const fn is_name_only(&self) -> bool {
        matches!(self, Self::NameOnly(_))
    }

    /// Attaches the default tag to a bare name; tagged and canonical
    /// references are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use registry_reference::Reference;
    ///
    /// let reference = Reference::parse("busybox").unwrap().with_default_tag();
    /// assert_eq!(reference.to_string(), "busybox:latest");
    ///
    /// let again = reference.clone().with_default_tag();
    /// assert_eq!(again, reference);
    /// ```
    #[must_use]
    pub fn with_default_tag(self) -> Self {
        match self {
            Self::NameOnly(name) => Self::Tagged(Tagged::new(name, Tag::latest())),
            other => other,
        }
    }

    /// Returns the name with any tag or digest removed.
    #[must_use]
    pub fn trim(&self) -> Name {
        self.base().clone()
    }

    /// Returns the fully qualified reference, e.g.
    /// `docker.io/library/busybox:latest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use registry_reference::Reference;
    ///
    /// let reference = Reference::parse("ubuntu:22.04").unwrap();
    /// assert_eq!(reference.full_reference(), "docker.io/library/ubuntu:22.04");
    /// ```
    #[must_use]
    pub fn full_reference(&self) -> String {
        let full_name = self.full_name();
        match self {
            Self::NameOnly(_) => full_name,
            Self::Tagged(tagged) => format!("{full_name}:{}", tagged.tag()),
            Self::Canonical(canonical) => format!("{full_name}@{}", canonical.digest()),
        }
    }

    /// Returns the tagged variant, if any.
    #[must_use]
    pub const fn as_tagged(&self) -> Option<&Tagged> {
        match self {
            Self::Tagged(tagged) => Some(tagged),
            _ => None,
        }
    }

    /// Returns the canonical variant, if any.
    #[must_use]
    pub const fn as_canonical(&self) -> Option<&Canonical> {
        match self {
            Self::Canonical(canonical) => Some(canonical),
            _ => None,
        }
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        // Split off digest
        let (rest, digest) = Self::split_digest(input)?;

        // Split off tag
        let (name_str, tag) = Self::split_tag(rest)?;

        if name_str.is_empty() {
            return Err(ParseErrorKind::MissingName);
        }

        let name = Name::parse(name_str).map_err(ParseErrorKind::InvalidName)?;
        let tag = tag
            .map(Tag::parse)
            .transpose()
            .map_err(ParseErrorKind::InvalidTag)?;

        if let Some(digest_str) = digest {
            let digest = Digest::parse(digest_str).map_err(ParseErrorKind::InvalidDigest)?;
            if let Some(tag) = &tag {
                debug!(input, tag = tag.as_str(), "digest takes precedence; dropping tag");
            }
            return Ok(Self::Canonical(Canonical::new(name, digest)));
        }

        Ok(match tag {
            Some(tag) => Self::Tagged(Tagged::new(name, tag)),
            None => Self::NameOnly(name),
        })
    }

    fn split_digest(input: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
        let Some((rest, digest)) = input.split_once('@') else {
            return Ok((input, None));
        };

        if digest.contains('@') {
            return Err(ParseErrorKind::MultipleDigests);
        }

        if digest.is_empty() {
            return Err(ParseErrorKind::EmptyDigest);
        }

        Ok((rest, Some(digest)))
    }

    fn split_tag(input: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
        // A ':' before the last '/' belongs to a registry port
        let last_slash = input.rfind('/');
        match input.rfind(':') {
            Some(colon) if last_slash.is_none_or(|slash| colon > slash) => {
                let tag = &input[colon + 1..];
                if tag.is_empty() {
                    return Err(ParseErrorKind::EmptyTag);
                }
                Ok((&input[..colon], Some(tag)))
            }
            _ => Ok((input, None)),
        }
    }
}

impl Named for Reference {
    fn base(&self) -> &Name {
        match self {
            Self::NameOnly(name) => name,
            Self::Tagged(tagged) => tagged.base(),
            Self::Canonical(canonical) => canonical.base(),
        }
    }
}

impl From<Name> for Reference {
    fn from(name: Name) -> Self {
        Self::NameOnly(name)
    }
}

impl From<Tagged> for Reference {
    fn from(tagged: Tagged) -> Self {
        Self::Tagged(tagged)
    }
}

impl From<Canonical> for Reference {
    fn from(canonical: Canonical) -> Self {
        Self::Canonical(canonical)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameOnly(name) => write!(f, "{name}"),
            Self::Tagged(tagged) => write!(f, "{tagged}"),
            Self::Canonical(canonical) => write!(f, "{canonical}"),
        }
    }
}

impl FromStr for Reference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Reference {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.base(), self.tag(), self.digest()).cmp(&(other.base(), other.tag(), other.digest()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Reference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
