//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use registry_reference::prelude::*;
//!
//! let reference = Reference::parse("ubuntu:22.04").unwrap();
//! assert_eq!(reference.full_name(), "docker.io/library/ubuntu");
//! ```
//!
//! The [`Named`] trait is included so its accessors resolve without a
//! separate import.

pub use crate::{
    // Core types
    Canonical, Digest, IdOrReference, Name, Named, PathComponent, Reference, Tag, Tagged,
    // Functions
    normalize, parse_id_or_reference, split_hostname,
    // Errors
    DigestError, HostnameError, NameError, ParseError, ParseErrorKind, PathComponentError,
    TagError,
    // Constants
    DEFAULT_HOSTNAME, DEFAULT_NAMESPACE, DEFAULT_TAG, LEGACY_DEFAULT_HOSTNAME,
    MAX_NAMESPACE_LENGTH, MAX_TAG_LENGTH,
};
