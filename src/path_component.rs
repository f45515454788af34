//! Path component type for repository names.

use std::fmt;
use std::str::FromStr;

use crate::error::PathComponentError;

/// A validated `/`-separated component of a repository path.
///
/// Components are runs of lowercase letters and digits joined by a single
/// `.`, a single `_`, exactly two `_`, or one or more `-`. They never start or
/// end with a separator.
///
/// ```text
/// component = [a-z0-9]+ ( ( "." | "_" | "__" | "-"+ ) [a-z0-9]+ )*
/// ```
///
/// # Examples
///
/// ```
/// use registry_reference::PathComponent;
///
/// let c = PathComponent::parse("ubuntu-12.04-base").unwrap();
/// assert_eq!(c.as_str(), "ubuntu-12.04-base");
///
/// assert!(PathComponent::parse("docker---rules").is_ok());
/// assert!(PathComponent::parse("dock__er").is_ok());
/// assert!(PathComponent::parse("dock..er").is_err());
/// assert!(PathComponent::parse("-docker").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathComponent(String);

impl PathComponent {
    /// Parses a path component from a string.
    ///
    /// # Errors
    ///
    /// Returns `PathComponentError` if:
    /// - The component is empty
    /// - The component contains uppercase or otherwise invalid characters
    /// - The component starts or ends with a separator
    /// - Two periods or any other disallowed separator run appear
    pub fn parse(input: &str) -> Result<Self, PathComponentError> {
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    /// Checks a component against the grammar without allocating.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`PathComponent::parse`].
    pub fn validate(input: &str) -> Result<(), PathComponentError> {
        if input.is_empty() {
            return Err(PathComponentError::Empty);
        }

        for (i, c) in input.chars().enumerate() {
            if c.is_ascii_uppercase() {
                return Err(PathComponentError::Uppercase { char: c, position: i });
            }
            if !Self::is_valid_char(c) {
                return Err(PathComponentError::InvalidChar { char: c, position: i });
            }
        }

        // All characters are ASCII from here on.
        let bytes = input.as_bytes();
        let first = char::from(bytes[0]);
        if Self::is_separator(first) {
            return Err(PathComponentError::LeadingSeparator { found: first });
        }
        let last = char::from(bytes[bytes.len() - 1]);
        if Self::is_separator(last) {
            return Err(PathComponentError::TrailingSeparator { found: last });
        }

        let mut i = 0;
        while i < bytes.len() {
            if !Self::is_separator(char::from(bytes[i])) {
                i += 1;
                continue;
            }
            let start = i;
            while i < bytes.len() && Self::is_separator(char::from(bytes[i])) {
                i += 1;
            }
            let run = &input[start..i];
            if let Some(offset) = run.find("..") {
                return Err(PathComponentError::ConsecutivePeriods {
                    position: start + offset,
                });
            }
            if !Self::is_valid_separator(run) {
                return Err(PathComponentError::InvalidSeparator {
                    separator: run.to_string(),
                    position: start,
                });
            }
        }

        Ok(())
    }

    /// Returns the component as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character may appear in a component.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || Self::is_separator(c)
    }

    const fn is_separator(c: char) -> bool {
        matches!(c, '.' | '_' | '-')
    }

    fn is_valid_separator(run: &str) -> bool {
        matches!(run, "." | "_" | "__") || run.bytes().all(|b| b == b'-')
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PathComponent {
    type Err = PathComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PathComponent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
