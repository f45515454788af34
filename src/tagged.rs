//! A name combined with a tag.

use std::fmt;

use crate::name::Name;
use crate::named::Named;
use crate::tag::Tag;

/// A reference identified by a tag, e.g. `ubuntu:22.04`.
///
/// # Examples
///
/// ```
/// use registry_reference::{Name, Named};
///
/// let tagged = Name::parse("ubuntu").unwrap().with_tag("22.04").unwrap();
/// assert_eq!(tagged.tag().as_str(), "22.04");
/// assert_eq!(tagged.to_string(), "ubuntu:22.04");
/// assert_eq!(tagged.full_name(), "docker.io/library/ubuntu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tagged {
    name: Name,
    tag: Tag,
}

impl Tagged {
    /// Creates a tagged reference from validated parts.
    #[must_use]
    pub const fn new(name: Name, tag: Tag) -> Self {
        Self { name, tag }
    }

    /// Returns the tag.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Splits the reference into its name and tag.
    #[must_use]
    pub fn into_parts(self) -> (Name, Tag) {
        (self.name, self.tag)
    }
}

impl Named for Tagged {
    fn base(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}
