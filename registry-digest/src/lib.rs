//! Content digests for registry references.
//!
//! A digest is an immutable, content-addressed identifier written as
//! `<algorithm>:<hex>`:
//!
//! ```text
//! sha256:86e0e091d0da6bde2456dbb48306f3956bbeb2eae1b5b9a43045843f69fe4aaa
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use registry_digest::{Algorithm, Digest};
//!
//! let digest = Digest::parse(
//!     "sha256:86e0e091d0da6bde2456dbb48306f3956bbeb2eae1b5b9a43045843f69fe4aaa",
//! ).unwrap();
//! assert_eq!(digest.algorithm(), Algorithm::Sha256);
//! assert_eq!(digest.hex().len(), 64);
//!
//! // Bare content ids are 64 lowercase hex characters
//! assert!(registry_digest::validate_hex(digest.hex()).is_ok());
//!
//! // Digests can be computed from content
//! let computed = Digest::from_bytes(Algorithm::Sha256, b"hello");
//! assert!(computed.as_str().starts_with("sha256:"));
//! ```
//!
//! # Supported Algorithms
//!
//! | Algorithm | Hex length |
//! |-----------|------------|
//! | `sha256`  | 64 |
//! | `sha384`  | 96 |
//! | `sha512`  | 128 |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod algorithm;
mod digest;
mod error;

pub use algorithm::Algorithm;
pub use digest::{Digest, validate_hex};
pub use error::DigestError;
