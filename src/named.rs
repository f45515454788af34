//! The capability shared by every reference value.

use registry_digest::{Digest, DigestError};

use crate::canonical::Canonical;
use crate::error::TagError;
use crate::name::Name;
use crate::normalize::split_hostname;
use crate::tag::Tag;
use crate::tagged::Tagged;

/// Something with a validated repository name.
///
/// Implementors supply [`Named::base`]; every host-aware accessor is derived
/// from it by re-splitting the normalized name, so the result is the same no
/// matter how the value was spelled when it was parsed.
///
/// # Examples
///
/// ```
/// use registry_reference::{Name, Named};
///
/// for spelling in ["busybox", "docker.io/busybox", "index.docker.io/library/busybox"] {
///     let name = Name::parse(spelling).unwrap();
///     assert_eq!(name.name(), "busybox");
///     assert_eq!(name.full_name(), "docker.io/library/busybox");
/// }
/// ```
pub trait Named {
    /// Returns the underlying validated name.
    fn base(&self) -> &Name;

    /// Returns the normalized name, e.g. `ubuntu` or `example.com/app`.
    fn name(&self) -> &str {
        self.base().as_str()
    }

    /// Returns the fully qualified name, e.g. `docker.io/library/ubuntu`.
    fn full_name(&self) -> String {
        let (hostname, remote_name) = split_hostname(self.name());
        format!("{hostname}/{remote_name}")
    }

    /// Returns the registry hostname, e.g. `docker.io`.
    fn hostname(&self) -> &str {
        split_hostname(self.name()).0
    }

    /// Returns the repository path without the hostname, e.g. `library/ubuntu`.
    fn remote_name(&self) -> String {
        split_hostname(self.name()).1.into_owned()
    }

    /// Combines this name with a tag. Any existing tag or digest is replaced.
    ///
    /// # Errors
    ///
    /// Returns `TagError` if the tag is malformed.
    fn with_tag(&self, tag: &str) -> Result<Tagged, TagError> {
        Ok(Tagged::new(self.base().clone(), Tag::parse(tag)?))
    }

    /// Combines this name with a digest. Any existing tag or digest is replaced.
    ///
    /// # Errors
    ///
    /// Returns `DigestError` if the digest is malformed.
    fn with_digest(&self, digest: &str) -> Result<Canonical, DigestError> {
        Ok(self.with_parsed_digest(Digest::parse(digest)?))
    }

    /// Combines this name with an already validated digest.
    fn with_parsed_digest(&self, digest: Digest) -> Canonical {
        Canonical::new(self.base().clone(), digest)
    }
}
