//! Error types for reference parsing.

use registry_digest::DigestError;

/// Errors that can occur when parsing a reference string.
///
/// Every structural or grammar failure surfaces as an invalid reference
/// format, with `kind` carrying the underlying reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reference format '{input}': {kind}")]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the name error, if the name portion was rejected.
    #[must_use]
    pub const fn name_error(&self) -> Option<&NameError> {
        match &self.kind {
            ParseErrorKind::InvalidName(e) => Some(e),
            _ => None,
        }
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Reference is empty
    #[error("input is empty")]
    Empty,
    /// Nothing precedes the tag or digest suffix
    #[error("missing repository name")]
    MissingName,
    /// A `:` is present but no tag follows it
    #[error("tag cannot be empty after ':'")]
    EmptyTag,
    /// An `@` is present but no digest follows it
    #[error("digest cannot be empty after '@'")]
    EmptyDigest,
    /// More than one `@` separator
    #[error("found more than one '@' separator")]
    MultipleDigests,
    /// Name parsing failed
    #[error("invalid name: {0}")]
    InvalidName(NameError),
    /// Tag parsing failed
    #[error("invalid tag: {0}")]
    InvalidTag(TagError),
    /// Digest parsing failed
    #[error("invalid digest: {0}")]
    InvalidDigest(DigestError),
}

/// Errors for repository name validation and normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Name is empty
    #[error("name cannot be empty")]
    Empty,
    /// Repository path contains uppercase characters
    #[error("repository name '{name}' must be lowercase")]
    NotLowercase {
        /// The rejected repository path
        name: String,
    },
    /// The explicit registry hostname is malformed
    #[error("invalid hostname '{hostname}': {reason}")]
    InvalidHostname {
        /// The rejected hostname
        hostname: String,
        /// Reason for invalidity
        reason: HostnameError,
    },
    /// A `/`-separated path component is malformed
    #[error("invalid path component '{component}' at index {index}: {reason}")]
    InvalidComponent {
        /// The invalid component
        component: String,
        /// Index of the component within the repository path
        index: usize,
        /// Reason for invalidity
        reason: PathComponentError,
    },
    /// The portion before the first `/` is too long
    #[error("namespace length {actual} exceeds maximum {max}")]
    NamespaceTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// The name is a 64-character hex string, reserved for content ids
    #[error("invalid repository name '{name}'; cannot specify 64-byte hexadecimal strings")]
    AmbiguousHex {
        /// The rejected name
        name: String,
    },
}

/// Errors for a single path component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathComponentError {
    /// Component is empty
    #[error("component cannot be empty")]
    Empty,
    /// Invalid character
    #[error(
        "invalid character '{char}' at position {position}; only lowercase letters, digits, '.', '_', and '-' allowed"
    )]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the component
        position: usize,
    },
    /// Uppercase character
    #[error("uppercase character '{char}' at position {position}")]
    Uppercase {
        /// The uppercase character
        char: char,
        /// Position in the component
        position: usize,
    },
    /// Component starts with a separator
    #[error("component cannot start with separator '{found}'")]
    LeadingSeparator {
        /// The separator found
        found: char,
    },
    /// Component ends with a separator
    #[error("component cannot end with separator '{found}'")]
    TrailingSeparator {
        /// The separator found
        found: char,
    },
    /// Two periods in a row
    #[error("consecutive periods at position {position}")]
    ConsecutivePeriods {
        /// Position of the first period
        position: usize,
    },
    /// A separator run that is not `.`, `_`, `__`, or one or more `-`
    #[error("invalid separator '{separator}' at position {position}")]
    InvalidSeparator {
        /// The separator run
        separator: String,
        /// Position of the run
        position: usize,
    },
}

/// Errors for registry hostname validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostnameError {
    /// Hostname is empty
    #[error("hostname cannot be empty")]
    Empty,
    /// Empty label (leading, trailing, or consecutive dots)
    #[error("empty label (consecutive dots or leading/trailing dot)")]
    EmptyLabel,
    /// Invalid character in a label
    #[error("invalid character '{char}' at position {position}")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the hostname
        position: usize,
    },
    /// Label starts or ends with a hyphen
    #[error("label '{label}' cannot start or end with hyphen")]
    HyphenBoundary {
        /// The offending label
        label: String,
    },
    /// Port is not a run of digits
    #[error("invalid port '{value}'; port must be one or more digits")]
    InvalidPort {
        /// The invalid port text
        value: String,
    },
}

/// Errors for tag validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// Tag is empty
    #[error("tag cannot be empty")]
    Empty,
    /// Tag exceeds maximum length
    #[error("tag length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// First character is not a letter, digit, or underscore
    #[error("tag must start with a letter, digit, or underscore, found '{found}'")]
    InvalidStart {
        /// The character found
        found: char,
    },
    /// Invalid character
    #[error(
        "invalid character '{char}' at position {position}; only letters, digits, '_', '.', and '-' allowed"
    )]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the tag
        position: usize,
    },
}
