//! Hostname splitting and name normalization.
//!
//! Three spellings denote the same artifact on the default registry:
//!
//! | Spelling | Example |
//! |----------|---------|
//! | minimal | `ubuntu` |
//! | fully qualified | `docker.io/library/ubuntu` |
//! | legacy alias | `index.docker.io/library/ubuntu` |
//!
//! [`normalize`] collapses all of them to the minimal form, which is what a
//! [`Name`](crate::Name) stores. [`split_hostname`] expands any form back into
//! a hostname and a remote name.

use std::borrow::Cow;

use tracing::trace;

use crate::constants::{DEFAULT_HOSTNAME, DEFAULT_NAMESPACE_PREFIX, LEGACY_DEFAULT_HOSTNAME};
use crate::error::NameError;
use crate::hostname::is_explicit_hostname;

/// Splits a name into its hostname and remote name.
///
/// The text before the first `/` is taken as the hostname only if it looks
/// like one (see [`is_explicit_hostname`]); otherwise the default hostname is
/// used and the whole input is the remote name. The legacy alias is folded to
/// the default hostname, and single-component remote names on the default
/// hostname gain the `library/` namespace.
///
/// The input is not validated.
///
/// # Examples
///
/// ```
/// use registry_reference::split_hostname;
///
/// let (host, remote) = split_hostname("ubuntu");
/// assert_eq!((host, remote.as_ref()), ("docker.io", "library/ubuntu"));
///
/// let (host, remote) = split_hostname("index.docker.io/fooo/bar");
/// assert_eq!((host, remote.as_ref()), ("docker.io", "fooo/bar"));
///
/// let (host, remote) = split_hostname("localhost:5000/privatebase");
/// assert_eq!((host, remote.as_ref()), ("localhost:5000", "privatebase"));
/// ```
#[must_use]
pub fn split_hostname(name: &str) -> (&str, Cow<'_, str>) {
    let (hostname, remote_name) = match name.split_once('/') {
        Some((first, rest)) if is_explicit_hostname(first) => (first, rest),
        _ => (DEFAULT_HOSTNAME, name),
    };

    let hostname = if hostname == LEGACY_DEFAULT_HOSTNAME {
        DEFAULT_HOSTNAME
    } else {
        hostname
    };

    if hostname == DEFAULT_HOSTNAME && !remote_name.contains('/') {
        return (
            hostname,
            Cow::Owned(format!("{DEFAULT_NAMESPACE_PREFIX}{remote_name}")),
        );
    }

    (hostname, Cow::Borrowed(remote_name))
}

/// Returns a name in its minimal form.
///
/// On the default hostname the hostname is dropped and a leading `library/`
/// namespace is elided. The one exception is a remainder that itself starts
/// with `library/`: `library/library/x` is kept whole, since eliding once
/// would yield a name that elides again on the next pass. Names on any other
/// registry are returned unchanged.
///
/// # Errors
///
/// Returns `NameError::NotLowercase`, carrying the input as written, if the
/// remote name contains uppercase characters. Case is never coerced.
///
/// # Examples
///
/// ```
/// use registry_reference::normalize;
///
/// assert_eq!(normalize("docker.io/library/ubuntu").unwrap(), "ubuntu");
/// assert_eq!(normalize("index.docker.io/fooo/bar").unwrap(), "fooo/bar");
/// assert_eq!(normalize("docker.io/library/foo/bar").unwrap(), "foo/bar");
/// assert_eq!(normalize("example.com/privatebase").unwrap(), "example.com/privatebase");
/// assert!(normalize("docker/Docker").is_err());
/// ```
pub fn normalize(name: &str) -> Result<String, NameError> {
    let (hostname, remote_name) = split_hostname(name);

    if remote_name.chars().any(char::is_uppercase) {
        return Err(NameError::NotLowercase {
            name: name.to_string(),
        });
    }

    if hostname != DEFAULT_HOSTNAME {
        return Ok(name.to_string());
    }

    if name
        .split_once('/')
        .is_some_and(|(first, _)| first == LEGACY_DEFAULT_HOSTNAME)
    {
        trace!(name, "folded legacy default hostname");
    }

    match remote_name.strip_prefix(DEFAULT_NAMESPACE_PREFIX) {
        Some(official) if !official.starts_with(DEFAULT_NAMESPACE_PREFIX) => {
            trace!(name, official, "elided default namespace");
            Ok(official.to_string())
        }
        _ => Ok(remote_name.into_owned()),
    }
}
