//! Tag type for version labels.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_TAG, MAX_TAG_LENGTH};
use crate::error::TagError;

/// A validated tag from a reference.
///
/// A tag starts with a letter, digit, or underscore, continues with letters,
/// digits, underscores, periods, or hyphens, and is at most 128 characters.
///
/// # Examples
///
/// ```
/// use registry_reference::Tag;
///
/// let tag = Tag::parse("22.04").unwrap();
/// assert_eq!(tag.as_str(), "22.04");
///
/// assert!(Tag::parse("-foo").is_err());
/// assert!(Tag::parse(".hidden").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Parses a tag from a string (without the leading ':').
    ///
    /// # Errors
    ///
    /// Returns `TagError` if:
    /// - The tag is empty
    /// - The tag exceeds 128 characters
    /// - The first character is not a letter, digit, or underscore
    /// - Any character is outside `[A-Za-z0-9_.-]`
    pub fn parse(input: &str) -> Result<Self, TagError> {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return Err(TagError::Empty);
        };

        if input.len() > MAX_TAG_LENGTH {
            return Err(TagError::TooLong {
                max: MAX_TAG_LENGTH,
                actual: input.len(),
            });
        }

        if !Self::is_valid_start(first) {
            return Err(TagError::InvalidStart { found: first });
        }

        for (i, c) in chars.enumerate() {
            if !Self::is_valid_char(c) {
                return Err(TagError::InvalidChar {
                    char: c,
                    position: i + 1,
                });
            }
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the default tag, `latest`.
    #[must_use]
    pub fn latest() -> Self {
        Self(DEFAULT_TAG.to_string())
    }

    /// Returns the tag as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character may start a tag.
    #[must_use]
    pub const fn is_valid_start(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Returns true if the character may appear after the first position.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Tag {
    type Error = TagError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
