//! Registry hostname recognition and validation.
//!
//! # Grammar Reference
//!
//! ```text
//! hostname         = domain-component *( "." domain-component ) [ ":" port ]
//! domain-component = alnum / alnum *( alnum / "-" ) alnum
//! port             = 1*DIGIT
//! ```
//!
//! Hostnames are case-insensitive on the wire but are kept exactly as
//! written; only the repository path is held to the lowercase rule.

use crate::constants::LOCALHOST;
use crate::error::HostnameError;

/// Returns true if the text before a name's first `/` denotes a registry host.
///
/// A host is recognized only if it contains a `.` or a `:`, or is exactly
/// `localhost`. Anything else is the first component of the repository path.
///
/// # Examples
///
/// ```
/// use registry_reference::is_explicit_hostname;
///
/// assert!(is_explicit_hostname("docker.io"));
/// assert!(is_explicit_hostname("127.0.0.1:5000"));
/// assert!(is_explicit_hostname("localhost"));
/// assert!(!is_explicit_hostname("library"));
/// ```
#[must_use]
pub fn is_explicit_hostname(part: &str) -> bool {
    part.contains(['.', ':']) || part == LOCALHOST
}

/// Validates an explicit registry hostname.
///
/// # Errors
///
/// Returns `HostnameError` if:
/// - The hostname or its domain part is empty
/// - The port is empty or not all digits
/// - A label is empty, contains characters other than letters, digits, and
///   hyphens, or starts or ends with a hyphen
///
/// # Examples
///
/// ```
/// use registry_reference::validate_hostname;
///
/// assert!(validate_hostname("example.com:8000").is_ok());
/// assert!(validate_hostname("-docker.io").is_err());
/// assert!(validate_hostname("localhost:").is_err());
/// ```
pub fn validate_hostname(host: &str) -> Result<(), HostnameError> {
    if host.is_empty() {
        return Err(HostnameError::Empty);
    }

    let (domain, port) = match host.rsplit_once(':') {
        Some((domain, port)) => (domain, Some(port)),
        None => (host, None),
    };

    if let Some(port) = port.filter(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return Err(HostnameError::InvalidPort {
            value: port.to_string(),
        });
    }

    if domain.is_empty() {
        return Err(HostnameError::Empty);
    }

    let mut offset = 0;
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(HostnameError::EmptyLabel);
        }

        for (j, c) in label.chars().enumerate() {
            if !c.is_ascii_alphanumeric() && c != '-' {
                return Err(HostnameError::InvalidChar {
                    char: c,
                    position: offset + j,
                });
            }
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(HostnameError::HyphenBoundary {
                label: label.to_string(),
            });
        }

        offset += label.len() + 1;
    }

    Ok(())
}
