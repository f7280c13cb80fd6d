//! Property-based tests for path handling.
//!
//! Note: The individual modules already carry light property tests. This
//! module runs the heavier, cross-module properties with many more cases.

use super::components::{dirname, ext_name};
use super::join::join;
use super::normalize::normalize;
use super::resolve::{is_absolute, resolve};
use super::PathStyle;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn noisy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => path_component_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
            1 => Just(String::new()),
        ],
        0..10,
    )
    .prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent: resolve(resolve(p)) == resolve(p)
    #[test]
    fn path_resolution_idempotent(path in noisy_path_strategy()) {
        if let Ok(once) = resolve(&path, PathStyle::Posix) {
            let twice = resolve(&once, PathStyle::Posix);
            prop_assert_eq!(twice.ok(), Some(once));
        }
    }

    // Normalization is stable on arbitrary text
    #[test]
    fn normalization_stable(path in "\\PC{0,40}") {
        for style in [PathStyle::Posix, PathStyle::Windows] {
            let once = normalize(&path, style);
            prop_assert_eq!(normalize(&once, style), once);
        }
    }

    // Resolving a path appended with ".." gives the resolved dirname
    #[test]
    fn parent_via_join_matches_dirname(path in absolute_path_strategy()) {
        let parent = join(&path, &[".."], true, PathStyle::Posix).unwrap();
        prop_assert_eq!(parent, dirname(&path, PathStyle::Posix));
    }

    // Resolved paths never contain "." or ".." segments and stay absolute
    #[test]
    fn resolved_paths_have_no_special_segments(path in noisy_path_strategy()) {
        if let Ok(resolved) = resolve(&path, PathStyle::Posix) {
            prop_assert!(is_absolute(&resolved, PathStyle::Posix));
            prop_assert!(!resolved.split('/').any(|s| s == "." || s == ".."));
        }
    }

    // The extension never contains a separator
    #[test]
    fn extension_has_no_separator(path in "[a-z./]{0,30}") {
        if let Some(ext) = ext_name(&path, PathStyle::Posix) {
            prop_assert!(!ext.contains('/'));
            prop_assert!(path.ends_with(ext));
        }
    }

    // Windows resolution never leaves a forward slash behind
    #[test]
    fn windows_resolution_uses_backslashes(
        drive in "[A-Za-z]",
        parts in prop::collection::vec(path_component_strategy(), 0..6)
    ) {
        let path = format!("{drive}:/{}", parts.join("/"));
        let resolved = resolve(&path, PathStyle::Windows).unwrap();
        prop_assert!(!resolved.contains('/'));
        prop_assert!(is_absolute(&resolved, PathStyle::Windows));
    }
}
