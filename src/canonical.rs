//! A name combined with a content digest.

use std::fmt;

use registry_digest::Digest;

use crate::name::Name;
use crate::named::Named;

/// A reference identified by digest, e.g. `busybox@sha256:86e0…`.
///
/// # Examples
///
/// ```
/// use registry_reference::{Name, Named};
///
/// let hex = "86e0e091d0da6bde2456dbb48306f3956bbeb2eae1b5b9a43045843f69fe4aaa";
/// let canonical = Name::parse("busybox")
///     .unwrap()
///     .with_digest(&format!("sha256:{hex}"))
///     .unwrap();
/// assert_eq!(canonical.digest().hex(), hex);
/// assert_eq!(canonical.to_string(), format!("busybox@sha256:{hex}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Canonical {
    name: Name,
    digest: Digest,
}

impl Canonical {
    /// Creates a canonical reference from validated parts.
    #[must_use]
    pub const fn new(name: Name, digest: Digest) -> Self {
        Self { name, digest }
    }

    /// Returns the digest.
    #[must_use]
    pub const fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Splits the reference into its name and digest.
    #[must_use]
    pub fn into_parts(self) -> (Name, Digest) {
        (self.name, self.digest)
    }
}

impl Named for Canonical {
    fn base(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.digest)
    }
}
