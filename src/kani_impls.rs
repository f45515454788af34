//! Kani Arbitrary implementations and proof harnesses.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Name, Named, PathComponent, Reference, Tag, normalize};

/// Lowercase letters and digits
const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Single-character separators allowed inside a component
const SEPARATORS: &[u8] = b"._-";

fn arbitrary_alnum() -> char {
    let idx: usize = kani::any();
    ALNUM[idx % ALNUM.len()] as char
}

fn arbitrary_separator() -> char {
    let idx: usize = kani::any();
    SEPARATORS[idx % SEPARATORS.len()] as char
}

impl kani::Arbitrary for PathComponent {
    fn any() -> Self {
        // 1-3 alnum runs joined by single separators
        let runs: usize = kani::any();
        let runs = 1 + (runs % 3);

        let mut s = String::new();
        for i in 0..runs {
            if i > 0 {
                s.push(arbitrary_separator());
            }
            let len: usize = kani::any();
            for _ in 0..1 + (len % 3) {
                s.push(arbitrary_alnum());
            }
        }

        PathComponent::parse(&s).expect("valid component by construction")
    }
}

impl kani::Arbitrary for Tag {
    fn any() -> Self {
        let len: usize = kani::any();
        let len = 1 + (len % 6);

        let s: String = (0..len)
            .map(|i| {
                if i > 0 && kani::any() {
                    arbitrary_separator()
                } else {
                    arbitrary_alnum()
                }
            })
            .collect();

        Tag::parse(&s).expect("valid tag by construction")
    }
}

impl kani::Arbitrary for Name {
    fn any() -> Self {
        let namespace: PathComponent = kani::any();
        let repository: PathComponent = kani::any();
        let qualified: bool = kani::any();

        let s = if qualified {
            format!("docker.io/{namespace}/{repository}")
        } else {
            format!("{namespace}/{repository}")
        };

        Name::parse(&s).expect("valid name by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Normalization is idempotent
#[kani::proof]
#[kani::unwind(12)]
fn proof_normalize_idempotent() {
    let name: Name = kani::any();
    let once = normalize(name.as_str()).expect("normalized name normalizes");
    assert_eq!(once, name.as_str());
}

/// Proof: The fully qualified name parses back to the same name
#[kani::proof]
#[kani::unwind(12)]
fn proof_full_name_roundtrip() {
    let name: Name = kani::any();
    let reparsed = Name::parse(&name.full_name()).expect("full name should parse");
    assert_eq!(reparsed, name);
}

/// Proof: A tagged reference displays and reparses to itself
#[kani::proof]
#[kani::unwind(12)]
fn proof_tagged_roundtrip() {
    let name: Name = kani::any();
    let tag: Tag = kani::any();
    let reference = Reference::from(name.with_tag(tag.as_str()).expect("valid tag"));
    let reparsed = Reference::parse(&reference.to_string()).expect("display should parse");
    assert_eq!(reparsed, reference);
}
