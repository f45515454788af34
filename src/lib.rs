//! Parser and normalizer for container image references.
//!
//! A reference names a repository on a registry and optionally pins it to a
//! tag or to a content digest:
//!
//! ```text
//! [hostname/]path-component[/path-component...][:tag][@algorithm:hex]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use registry_reference::{Named, Reference};
//!
//! let reference = Reference::parse("index.docker.io/library/ubuntu:22.04").unwrap();
//!
//! // Minimal form is what gets stored and displayed
//! assert_eq!(reference.name(), "ubuntu");
//! assert_eq!(reference.to_string(), "ubuntu:22.04");
//!
//! // Host-aware accessors expand it again
//! assert_eq!(reference.hostname(), "docker.io");
//! assert_eq!(reference.remote_name(), "library/ubuntu");
//! assert_eq!(reference.full_name(), "docker.io/library/ubuntu");
//! ```
//!
//! # Normalization
//!
//! On the default registry a name may be written three ways. All of them
//! parse to equal values:
//!
//! ```rust
//! use registry_reference::Name;
//!
//! let minimal = Name::parse("busybox").unwrap();
//! assert_eq!(Name::parse("docker.io/library/busybox").unwrap(), minimal);
//! assert_eq!(Name::parse("index.docker.io/library/busybox").unwrap(), minimal);
//! ```
//!
//! Names on any other registry are stored exactly as written.
//!
//! # Content Identifiers
//!
//! [`parse_id_or_reference`] tells a bare 64-character hex identifier apart
//! from a name. For that reason no repository name may be exactly 64 lowercase
//! hex characters.
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Text before the first `/` | 255 chars |
//! | Tag | 128 chars |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types, as strings
//! - `kani`: proof harnesses for the Kani model checker

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod canonical;
mod constants;
mod error;
mod hostname;
mod id_or_reference;
#[cfg(kani)]
mod kani_impls;
mod name;
mod named;
mod normalize;
mod path_component;
pub mod prelude;
mod reference;
mod tag;
mod tagged;

pub use canonical::Canonical;
pub use constants::{
    DEFAULT_HOSTNAME, DEFAULT_NAMESPACE, DEFAULT_TAG, LEGACY_DEFAULT_HOSTNAME, LOCALHOST,
    MAX_NAMESPACE_LENGTH, MAX_TAG_LENGTH,
};
pub use error::{
    HostnameError, NameError, ParseError, ParseErrorKind, PathComponentError, TagError,
};
pub use hostname::{is_explicit_hostname, validate_hostname};
pub use id_or_reference::{IdOrReference, parse_id_or_reference};
pub use name::Name;
pub use named::Named;
pub use normalize::{normalize, split_hostname};
pub use path_component::PathComponent;
pub use reference::Reference;
pub use tag::Tag;
pub use tagged::Tagged;

pub use registry_digest::{Algorithm, Digest, DigestError, validate_hex};
