//! Property-based tests for path resolution.
//!
//! Note: The segment module already has property tests for splitting and
//! traversal. This module focuses on whole-path resolution across styles.

use super::resolve_path;
use crate::segment;
use crate::style::PathStyle;
use proptest::prelude::*;

// Strategy for generating path segments. Colons are excluded so a segment
// can never introduce a drive-letter anchor.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,10}"
}

// Segments guaranteed to carry at least one uppercase letter.
fn cased_segment_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9_-]{0,9}"
}

fn directory_base_strategy() -> impl Strategy<Value = String> {
    ("[a-z]", prop::collection::vec(segment_strategy(), 0..4))
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

fn unc_base_strategy() -> impl Strategy<Value = String> {
    (segment_strategy(), prop::collection::vec(segment_strategy(), 0..4)).prop_map(
        |(server, parts)| {
            if parts.is_empty() {
                format!("\\\\{server}")
            } else {
                format!("\\\\{server}\\{}", parts.join("\\"))
            }
        },
    )
}

fn url_base_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z]{2,6}",
        segment_strategy(),
        prop::option::of(1u32..65536),
        prop::collection::vec(segment_strategy(), 0..4),
    )
        .prop_map(|(scheme, host, port, parts)| {
            let mut base = format!("{scheme}://{host}");
            if let Some(port) = port {
                base.push_str(&format!(":{port}"));
            }
            for part in parts {
                base.push('/');
                base.push_str(&part);
            }
            base
        })
}

fn linux_base_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..5)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn any_base_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        directory_base_strategy(),
        unc_base_strategy(),
        url_base_strategy(),
        linux_base_strategy(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The drive root survives resolution untouched
    #[test]
    fn directory_resolution_preserves_root(
        drive in "[a-z]",
        parts in prop::collection::vec(segment_strategy(), 0..4),
        relative in prop::collection::vec(segment_strategy(), 0..4),
    ) {
        let root = format!("{drive}:\\");
        let base = format!("{root}{}", parts.join("\\"));
        let resolved = resolve_path(&base, &relative.join("\\")).unwrap();
        prop_assert!(resolved.starts_with(&root));
    }

    // The UNC server root survives resolution untouched
    #[test]
    fn unc_resolution_preserves_root(
        server in segment_strategy(),
        parts in prop::collection::vec(segment_strategy(), 0..4),
        relative in prop::collection::vec(segment_strategy(), 0..4),
    ) {
        let root = format!("\\\\{server}");
        let base = if parts.is_empty() {
            root.clone()
        } else {
            format!("{root}\\{}", parts.join("\\"))
        };
        let resolved = resolve_path(&base, &relative.join("\\")).unwrap();
        prop_assert!(resolved.starts_with(&root));
    }

    // The URL authority, port included, survives resolution untouched
    #[test]
    fn url_resolution_preserves_root(
        scheme in "[a-z]{2,6}",
        host in segment_strategy(),
        port in prop::option::of(1u32..65536),
        parts in prop::collection::vec(segment_strategy(), 0..4),
        relative in prop::collection::vec(segment_strategy(), 0..4),
    ) {
        let root = match port {
            Some(port) => format!("{scheme}://{host}:{port}"),
            None => format!("{scheme}://{host}"),
        };
        let base = if parts.is_empty() {
            root.clone()
        } else {
            format!("{root}/{}", parts.join("/"))
        };
        let resolved = resolve_path(&base, &relative.join("/")).unwrap();
        prop_assert!(resolved.starts_with(&root));
    }

    // Resolved POSIX paths always stay absolute
    #[test]
    fn linux_resolution_preserves_root(
        base in linux_base_strategy(),
        relative in prop::collection::vec(segment_strategy(), 0..4),
    ) {
        let resolved = resolve_path(&base, &relative.join("/")).unwrap();
        prop_assert!(resolved.starts_with('/'));
    }

    // Resolved outputs never retain a ".." segment
    #[test]
    fn resolved_output_has_no_parent_refs(
        base in any_base_strategy(),
        relative in prop::collection::vec(
            prop_oneof![Just("..".to_string()), segment_strategy()],
            0..8,
        ),
    ) {
        if let Ok(resolved) = resolve_path(&base, &relative.join("/")) {
            prop_assert!(!segment::split(&resolved).contains(&".."));
        }
    }

    // Re-resolving an output with an empty relative path changes nothing
    #[test]
    fn resolution_idempotent_with_empty_relative(
        base in any_base_strategy(),
        relative in prop::collection::vec(segment_strategy(), 0..4),
    ) {
        let once = resolve_path(&base, &relative.join("/")).unwrap();
        let twice = resolve_path(&once, "").unwrap();
        prop_assert_eq!(once, twice);
    }

    // Segment casing passes through resolution untouched
    #[test]
    fn resolution_preserves_case(
        parts in prop::collection::vec(cased_segment_strategy(), 1..4),
        relative in prop::collection::vec(cased_segment_strategy(), 1..4),
    ) {
        let base = format!("/{}", parts.join("/"));
        let resolved = resolve_path(&base, &relative.join("/")).unwrap();

        let expected = format!("/{}/{}", parts.join("/"), relative.join("/"));
        prop_assert_eq!(&resolved, &expected);
        prop_assert_ne!(resolved.clone(), resolved.to_lowercase());
    }

    // More ".." segments than the base holds always error
    #[test]
    fn excess_parent_refs_error(
        parts in prop::collection::vec(segment_strategy(), 0..5),
        extra in 1..4usize,
    ) {
        let base = format!("/{}", parts.join("/"));
        let relative = vec![".."; parts.len() + extra].join("/");
        prop_assert!(resolve_path(&base, &relative).is_err());
    }

    // Exactly as many ".." segments as the base holds lands on the root
    #[test]
    fn parent_refs_to_root_succeed(
        parts in prop::collection::vec(segment_strategy(), 0..5),
    ) {
        let base = format!("/{}", parts.join("/"));
        let relative = vec![".."; parts.len()].join("/");
        prop_assert_eq!(resolve_path(&base, &relative).unwrap(), "/");
    }

    // Forward and backward slashes in the relative path are interchangeable
    #[test]
    fn separator_choice_is_irrelevant(
        base in any_base_strategy(),
        relative in prop::collection::vec(segment_strategy(), 1..4),
    ) {
        let forward = resolve_path(&base, &relative.join("/")).unwrap();
        let backward = resolve_path(&base, &relative.join("\\")).unwrap();
        prop_assert_eq!(forward, backward);
    }

    // Resolution never changes which style a path belongs to
    #[test]
    fn resolution_preserves_style(
        base in any_base_strategy(),
        relative in prop::collection::vec(segment_strategy(), 0..4),
    ) {
        let style = PathStyle::detect(&base).unwrap();
        let resolved = resolve_path(&base, &relative.join("/")).unwrap();
        prop_assert_eq!(PathStyle::detect(&resolved).unwrap(), style);
    }
}
