//! Property-based tests validating the parser against the reference grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, then check that normalization and
//! display agree with each other.

use proptest::prelude::*;

use registry_reference::{
    HostnameError, MAX_TAG_LENGTH, Name, NameError, Named, PathComponent, Reference, Tag,
    TagError, is_explicit_hostname, normalize, validate_hostname,
};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Lowercase letters and digits
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// Separators allowed between alphanumeric runs in a path component
    const SEPARATORS: &[&str] = &[".", "_", "__", "-", "--", "---"];

    /// Characters allowed after the first character of a tag
    const TAG_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_.-";

    /// Characters allowed as the first character of a tag
    const TAG_START_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

    /// Lowercase hex digits
    const HEX_CHARS: &[u8] = b"0123456789abcdef";

    fn alnum_run(max: usize) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(ALPHANUMERIC.to_vec()), 1..=max)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Separators that never make a leading component look like a hostname
    const NAMESPACE_SEPARATORS: &[&str] = &["_", "__", "-", "--", "---"];

    fn component_with(separators: &'static [&'static str]) -> impl Strategy<Value = String> {
        (
            alnum_run(8),
            prop::collection::vec((prop::sample::select(separators), alnum_run(6)), 0..=2),
        )
            .prop_map(|(first, rest)| {
                let mut s = first;
                for (sep, run) in rest {
                    s.push_str(sep);
                    s.push_str(&run);
                }
                s
            })
    }

    /// Generate a valid path component (1-3 runs joined by separators)
    pub fn path_component() -> impl Strategy<Value = String> {
        component_with(SEPARATORS)
    }

    /// Generate a valid hostname label (alphanumeric, hyphens inside only)
    pub fn hostname_label() -> impl Strategy<Value = String> {
        (alnum_run(6), prop::option::of(("-{1,2}", alnum_run(6)))).prop_map(|(head, tail)| {
            match tail {
                Some((hyphens, rest)) => format!("{head}{hyphens}{rest}"),
                None => head,
            }
        })
    }

    /// Generate an explicit hostname: a dotted domain, an IPv4 address,
    /// or `localhost`, each with an optional port
    pub fn hostname() -> impl Strategy<Value = String> {
        let domain = prop::collection::vec(hostname_label(), 2..=3).prop_map(|l| l.join("."));
        let ipv4 = (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}"));
        let localhost = Just("localhost".to_string());

        (prop_oneof![domain, ipv4, localhost], prop::option::of(1u16..=65535)).prop_map(
            |(host, port)| match port {
                Some(p) => format!("{host}:{p}"),
                None => host,
            },
        )
    }

    /// Generate a repository path of 1-3 components whose first component
    /// contains no `.`, so it is never taken for a hostname
    pub fn remote_path() -> impl Strategy<Value = String> {
        (
            component_with(NAMESPACE_SEPARATORS),
            prop::collection::vec(path_component(), 0..=2),
        )
            .prop_map(|(first, rest)| {
                std::iter::once(first).chain(rest).collect::<Vec<_>>().join("/")
            })
    }

    /// Generate a repository path of 2-3 components on the default registry
    /// whose first component is not itself the default namespace
    pub fn namespaced_path() -> impl Strategy<Value = String> {
        (
            component_with(NAMESPACE_SEPARATORS).prop_filter("default namespace", |c| c != "library"),
            prop::collection::vec(path_component(), 1..=2),
        )
            .prop_map(|(first, rest)| {
                std::iter::once(first).chain(rest).collect::<Vec<_>>().join("/")
            })
    }

    /// Generate a name on some other registry
    pub fn hosted_name() -> impl Strategy<Value = String> {
        (hostname(), remote_path()).prop_map(|(host, path)| format!("{host}/{path}"))
    }

    /// Generate a name with or without an explicit hostname
    pub fn name() -> impl Strategy<Value = String> {
        prop_oneof![remote_path(), hosted_name()]
    }

    /// Generate a valid tag (1-128 chars)
    pub fn tag() -> impl Strategy<Value = String> {
        (
            prop::sample::select(TAG_START_CHARS.to_vec()),
            prop::collection::vec(prop::sample::select(TAG_CHARS.to_vec()), 0..MAX_TAG_LENGTH),
        )
            .prop_map(|(first, rest)| {
                std::iter::once(first).chain(rest).map(char::from).collect()
            })
    }

    /// Generate a 64-character lowercase hex string
    pub fn hex64() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(HEX_CHARS.to_vec()), 64..=64)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }
}

mod component_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_components_parse(c in path_component()) {
            let result = PathComponent::parse(&c);
            prop_assert!(result.is_ok(), "Failed to parse component: {}", c);
        }

        #[test]
        fn leading_separator_rejected(c in path_component(), sep in "[._-]") {
            let input = format!("{sep}{c}");
            prop_assert!(PathComponent::parse(&input).is_err(), "Accepted: {}", input);
        }

        #[test]
        fn trailing_separator_rejected(c in path_component(), sep in "[._-]") {
            let input = format!("{c}{sep}");
            prop_assert!(PathComponent::parse(&input).is_err(), "Accepted: {}", input);
        }

        #[test]
        fn double_period_rejected(a in path_component(), b in path_component()) {
            let input = format!("{a}..{b}");
            prop_assert!(PathComponent::parse(&input).is_err(), "Accepted: {}", input);
        }
    }
}

mod hostname_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_hostnames_validate(h in hostname()) {
            prop_assert!(is_explicit_hostname(&h), "Not recognized as host: {}", h);
            let result = validate_hostname(&h);
            prop_assert!(result.is_ok(), "Failed to validate hostname: {} ({:?})", h, result);
        }

        #[test]
        fn hyphen_boundary_rejected(label in hostname_label()) {
            let input = format!("-{label}.com");
            prop_assert!(
                matches!(validate_hostname(&input), Err(HostnameError::HyphenBoundary { .. })),
                "Accepted: {}", input
            );
        }
    }
}

mod tag_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_tags_parse(t in tag()) {
            let result = Tag::parse(&t);
            prop_assert!(result.is_ok(), "Failed to parse tag: {}", t);
        }

        #[test]
        fn tag_length_constraint(t in tag(), extra in "[a-z0-9]{129,160}") {
            let input = format!("{t}{extra}");
            prop_assert!(
                matches!(Tag::parse(&input), Err(TagError::TooLong { max: 128, .. })),
                "Accepted tag of length {}", input.len()
            );
        }

        #[test]
        fn tag_separator_start_rejected(t in tag(), sep in "[.-]") {
            let input = format!("{sep}{t}");
            prop_assert!(Tag::parse(&input).is_err(), "Accepted: {}", input);
        }
    }
}

mod name_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_names_parse(n in name()) {
            let result = Name::parse(&n);
            prop_assert!(result.is_ok(), "Failed to parse name: {} ({:?})", n, result);
        }

        #[test]
        fn normalize_is_idempotent(n in name()) {
            let once = normalize(&n).unwrap();
            let twice = normalize(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn full_name_reparses_to_same_name(n in name()) {
            let name = Name::parse(&n).unwrap();
            let reparsed = Name::parse(&name.full_name()).unwrap();
            prop_assert_eq!(reparsed, name);
        }

        #[test]
        fn hosted_names_keep_their_spelling(n in hosted_name()) {
            let name = Name::parse(&n).unwrap();
            prop_assert_eq!(name.as_str(), n.as_str());
        }

        #[test]
        fn default_registry_spellings_are_equivalent(path in remote_path()) {
            let minimal = Name::parse(&path).unwrap();
            for spelling in [
                format!("docker.io/{path}"),
                format!("index.docker.io/{path}"),
            ] {
                let other = Name::parse(&spelling).unwrap();
                prop_assert_eq!(&other, &minimal);
                prop_assert_eq!(other.full_name(), minimal.full_name());
            }
        }

        #[test]
        fn official_spellings_are_equivalent(c in path_component()) {
            let minimal = Name::parse(&c).unwrap();
            prop_assert_eq!(minimal.as_str(), c.as_str());
            for spelling in [
                format!("library/{c}"),
                format!("docker.io/library/{c}"),
                format!("index.docker.io/library/{c}"),
            ] {
                prop_assert_eq!(Name::parse(&spelling).unwrap(), minimal.clone());
            }
        }

        #[test]
        fn library_namespace_elided_before_nested_paths(path in namespaced_path()) {
            let minimal = Name::parse(&path).unwrap();
            prop_assert_eq!(minimal.as_str(), path.as_str());
            for spelling in [
                format!("library/{path}"),
                format!("docker.io/library/{path}"),
                format!("index.docker.io/library/{path}"),
            ] {
                let other = Name::parse(&spelling).unwrap();
                prop_assert_eq!(&other, &minimal);
                prop_assert_eq!(other.full_name(), format!("docker.io/{path}"));
                prop_assert_eq!(other.remote_name(), path.clone());
            }
        }

        #[test]
        fn uppercase_path_rejected(path in remote_path(), upper in "[A-Z]") {
            let input = format!("{path}/{upper}");
            prop_assert!(
                matches!(Name::parse(&input), Err(NameError::NotLowercase { .. })),
                "Accepted: {}", input
            );
        }

        #[test]
        fn hex_names_rejected(hex in hex64()) {
            prop_assert!(
                matches!(Name::parse(&hex), Err(NameError::AmbiguousHex { .. })),
                "Accepted: {}", hex
            );
        }
    }
}

mod reference_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn tagged_references_parse(n in name(), t in tag()) {
            let input = format!("{n}:{t}");
            let reference = Reference::parse(&input).unwrap();
            prop_assert_eq!(reference.tag().map(Tag::as_str), Some(t.as_str()));
        }

        #[test]
        fn display_reparses_to_same_reference(n in name(), t in prop::option::of(tag())) {
            let input = match &t {
                Some(t) => format!("{n}:{t}"),
                None => n.clone(),
            };
            let reference = Reference::parse(&input).unwrap();
            let reparsed = Reference::parse(&reference.to_string()).unwrap();
            prop_assert_eq!(reparsed, reference);
        }

        #[test]
        fn digest_wins_over_tag(n in name(), t in tag(), hex in hex64()) {
            let input = format!("{n}:{t}@sha256:{hex}");
            let reference = Reference::parse(&input).unwrap();
            prop_assert!(reference.tag().is_none());
            prop_assert_eq!(reference.digest().map(|d| d.hex()), Some(hex.as_str()));
            let expected = format!("{}@sha256:{hex}", reference.name());
            prop_assert_eq!(reference.to_string(), expected);
        }

        #[test]
        fn default_tag_is_idempotent(n in name()) {
            let once = Reference::parse(&n).unwrap().with_default_tag();
            let twice = once.clone().with_default_tag();
            prop_assert_eq!(once.tag().map(Tag::as_str), Some("latest"));
            prop_assert_eq!(twice, once);
        }
    }
}
