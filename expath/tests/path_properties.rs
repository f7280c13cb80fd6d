//! Integration tests for the documented path properties.
//!
//! Every property is checked under both styles where it applies, through
//! the public [`PathResolver`] facade only.

use expath::fs::{ensure_dir, FileSystem};
use expath::{Error, PathResolver, PathStyle};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;

fn posix() -> PathResolver {
    PathResolver::new().with_style(PathStyle::Posix)
}

fn windows() -> PathResolver {
    PathResolver::new().with_style(PathStyle::Windows)
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_dotdot_cancels_previous_segment() {
    let r = posix();
    assert_eq!(r.resolve("/a/b/..").unwrap(), r.resolve("/a").unwrap());
    assert_eq!(r.resolve("/a/../b").unwrap(), r.resolve("/b").unwrap());

    let w = windows();
    assert_eq!(w.resolve("C:\\a\\b\\..").unwrap(), w.resolve("C:\\a").unwrap());
    assert_eq!(w.resolve("C:\\a\\..\\b").unwrap(), w.resolve("C:\\b").unwrap());
}

#[test]
fn test_leading_dotdot_fails_in_both_styles() {
    for r in [posix(), windows()] {
        let err = r.resolve("../a").unwrap_err();
        assert!(matches!(err, Error::MalformedPath { .. }), "{err:?}");
    }
}

#[test]
fn test_single_dot_is_noop() {
    let r = posix();
    assert_eq!(r.resolve("/a/./b").unwrap(), r.resolve("/a/b").unwrap());
}

#[test]
fn test_root_validation() {
    assert!(windows().resolve("noroot/a").unwrap_err().is_malformed());
    assert!(posix().resolve("noroot/a").unwrap_err().is_malformed());
}

#[test]
fn test_dotdot_past_root_is_hard_failure() {
    assert!(posix().resolve("/..").unwrap_err().is_malformed());
    assert!(windows().resolve("D:\\..").unwrap_err().is_malformed());
}

// =============================================================================
// Normalization and joining
// =============================================================================

#[test]
fn test_doubled_separators_collapse() {
    let r = posix();
    assert_eq!(r.normalize("a//b///c"), r.normalize("a/b/c"));
}

#[test]
fn test_join_inserts_exactly_one_separator() {
    let r = posix();
    assert_eq!(r.join("/a", &["b", "c"], false).unwrap(), "/a/b/c");
    assert_eq!(r.join("/a/", &["b"], false).unwrap(), "/a/b");
}

#[test]
fn test_join_then_resolve_matches_resolve_against() {
    let r = posix();
    assert_eq!(
        r.join("/srv/app", &["../data"], true).unwrap(),
        r.resolve_against("/srv/app", "../data").unwrap()
    );
}

#[test]
fn test_extension_extraction() {
    let r = posix();
    assert_eq!(r.ext_name("/dir/file.tar.gz"), Some("gz"));
    assert_eq!(r.ext_name("/dir.ext/file"), None);
    assert_eq!(r.ext_name("/dir/file"), None);
}

// =============================================================================
// Directory creation
// =============================================================================

/// In-memory filesystem recording the order of created directories.
struct RecordingFileSystem {
    dirs: RefCell<BTreeSet<String>>,
    created: RefCell<Vec<String>>,
}

impl RecordingFileSystem {
    fn with_root(root: &str) -> Self {
        Self {
            dirs: RefCell::new(BTreeSet::from([root.to_string()])),
            created: RefCell::new(Vec::new()),
        }
    }
}

impl FileSystem for RecordingFileSystem {
    fn is_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn is_file(&self, _path: &str) -> bool {
        false
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        if !self.dirs.borrow_mut().insert(path.to_string()) {
            return Err(io::ErrorKind::AlreadyExists.into());
        }
        self.created.borrow_mut().push(path.to_string());
        Ok(())
    }
}

#[test]
fn test_ensure_dir_creates_ancestors_first() {
    let fs = RecordingFileSystem::with_root("/");
    ensure_dir(&fs, &posix(), "/a/b/c").unwrap();

    assert_eq!(*fs.created.borrow(), ["/a", "/a/b", "/a/b/c"]);
    for dir in ["/a", "/a/b", "/a/b/c"] {
        assert!(fs.is_dir(dir));
    }
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let fs = RecordingFileSystem::with_root("/");
    ensure_dir(&fs, &posix(), "/a/b").unwrap();
    ensure_dir(&fs, &posix(), "/a/./b/").unwrap();
    assert_eq!(fs.created.borrow().len(), 2);
}

#[test]
fn test_ensure_dir_windows_style() {
    let fs = RecordingFileSystem::with_root("C:\\");
    ensure_dir(&fs, &windows(), "c:/x/y").unwrap_err();

    let fs = RecordingFileSystem::with_root("c:\\");
    ensure_dir(&fs, &windows(), "c:/x/y").unwrap();
    assert_eq!(*fs.created.borrow(), ["c:\\x", "c:\\x\\y"]);
}

// =============================================================================
// Properties
// =============================================================================

fn posix_path() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["[a-z]{1,4}", Just(".".to_string()), Just("..".to_string())], 0..8)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #[test]
    fn prop_resolve_is_idempotent(path in posix_path()) {
        let r = posix();
        if let Ok(once) = r.resolve(&path) {
            prop_assert_eq!(r.resolve(&once).unwrap(), once);
        }
    }

    #[test]
    fn prop_normalize_is_stable(path in "[a-z/\\\\.]{0,24}") {
        for r in [posix(), windows()] {
            let once = r.normalize(&path);
            prop_assert_eq!(r.normalize(&once), once);
        }
    }

    #[test]
    fn prop_resolved_paths_are_absolute(path in posix_path()) {
        let r = posix();
        if let Ok(resolved) = r.resolve(&path) {
            prop_assert!(r.is_absolute(&resolved));
            prop_assert!(!resolved.split('/').any(|s| s == "." || s == ".."));
        }
    }
}
