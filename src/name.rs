//! Repository name type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use registry_digest::validate_hex;

use crate::constants::MAX_NAMESPACE_LENGTH;
use crate::error::NameError;
use crate::hostname::{is_explicit_hostname, validate_hostname};
use crate::named::Named;
use crate::normalize::normalize;
use crate::path_component::PathComponent;

/// A validated, normalized repository name.
///
/// The stored string is the minimal spelling: no default hostname and no
/// leading `library/` namespace (see [`normalize`](crate::normalize) for the
/// one repeated-namespace exception). Names on other
/// registries keep their hostname. Host-aware accessors come from the
/// [`Named`] trait.
///
/// # Constraints
///
/// - Repository path is lowercase
/// - One or more path components, each matching the component grammar
/// - An explicit hostname matches the hostname grammar
/// - At most 255 characters before the first `/`
/// - Never exactly 64 lowercase hex characters
///
/// # Examples
///
/// ```
/// use registry_reference::{Name, Named};
///
/// let name = Name::parse("docker.io/library/ubuntu").unwrap();
/// assert_eq!(name.as_str(), "ubuntu");
/// assert_eq!(name.full_name(), "docker.io/library/ubuntu");
/// assert_eq!(name.hostname(), "docker.io");
/// assert_eq!(name.remote_name(), "library/ubuntu");
///
/// // Other registries are never abbreviated
/// let name = Name::parse("example.com:8000/private/moonbase").unwrap();
/// assert_eq!(name.as_str(), "example.com:8000/private/moonbase");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    /// Normalized string representation
    normalized: String,
}

impl Name {
    /// Parses and normalizes a repository name.
    ///
    /// # Errors
    ///
    /// Returns `NameError` if:
    /// - The name is empty
    /// - The repository path contains uppercase characters
    /// - The explicit hostname is malformed
    /// - The namespace exceeds 255 characters
    /// - Any path component is malformed
    /// - The normalized name is a 64-character hex string
    pub fn parse(input: &str) -> Result<Self, NameError> {
        if input.is_empty() {
            return Err(NameError::Empty);
        }

        let normalized = normalize(input)?;
        Self::validate(&normalized)?;

        Ok(Self { normalized })
    }

    /// Returns the normalized string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the components of the normalized name after any explicit
    /// hostname.
    ///
    /// # Examples
    ///
    /// ```
    /// use registry_reference::Name;
    ///
    /// let name = Name::parse("localhost:5000/team/app").unwrap();
    /// assert_eq!(name.components().collect::<Vec<_>>(), ["team", "app"]);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> {
        Self::split_explicit_host(&self.normalized).1.split('/')
    }

    fn validate(name: &str) -> Result<(), NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        if validate_hex(name).is_ok() {
            return Err(NameError::AmbiguousHex {
                name: name.to_string(),
            });
        }

        let namespace_len = name.split_once('/').map_or(0, |(namespace, _)| namespace.len());
        if namespace_len > MAX_NAMESPACE_LENGTH {
            return Err(NameError::NamespaceTooLong {
                max: MAX_NAMESPACE_LENGTH,
                actual: namespace_len,
            });
        }

        let (hostname, path) = Self::split_explicit_host(name);
        if let Some(hostname) = hostname {
            validate_hostname(hostname).map_err(|reason| NameError::InvalidHostname {
                hostname: hostname.to_string(),
                reason,
            })?;
        }

        for (index, component) in path.split('/').enumerate() {
            PathComponent::validate(component).map_err(|reason| NameError::InvalidComponent {
                component: component.to_string(),
                index,
                reason,
            })?;
        }

        Ok(())
    }

    fn split_explicit_host(name: &str) -> (Option<&str>, &str) {
        match name.split_once('/') {
            Some((first, rest)) if is_explicit_hostname(first) => (Some(first), rest),
            _ => (None, name),
        }
    }
}

impl Named for Name {
    fn base(&self) -> &Name {
        self
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
