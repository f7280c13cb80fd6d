//! Resolution of paths to canonical absolute form.
//!
//! Resolution is textual: the path is normalized, split into segments, `.` and
//! `..` are collapsed left to right, and the result must start with a root
//! marker of the [`PathStyle`]. The filesystem is never consulted, so symlinks
//! are not followed and the path need not exist.
//!
//! A `..` can only cancel a segment that precedes it. There is no fallback to
//! the current working directory: a `..` with nothing before it is an error,
//! and so is a `..` that cancels the root marker itself.

use crate::error::{Error, Result};
use crate::path::normalize::normalize;
use crate::path::PathStyle;

/// Split an already normalized path into segments.
///
/// A leading empty fragment is kept because it is the POSIX root marker.
/// Any other empty fragment can only come from a trailing separator and is
/// dropped. An empty input yields no segments.
///
/// # Examples
///
/// ```
/// use expath::path::{resolve::split_segments, PathStyle};
///
/// assert_eq!(split_segments("/a/b/", PathStyle::Posix), vec!["", "a", "b"]);
/// assert_eq!(split_segments("C:\\a", PathStyle::Windows), vec!["C:", "a"]);
/// assert!(split_segments("", PathStyle::Posix).is_empty());
/// ```
#[must_use]
pub fn split_segments(normalized: &str, style: PathStyle) -> Vec<&str> {
    if normalized.is_empty() {
        return Vec::new();
    }

    normalized
        .split(style.separator())
        .enumerate()
        .filter(|(index, fragment)| *index == 0 || !fragment.is_empty())
        .map(|(_, fragment)| fragment)
        .collect()
}

/// Collapse `.` and `..` segments.
///
/// `.` is dropped. `..` removes itself and the segment before it. Returns
/// `None` when a `..` has no preceding segment to cancel.
///
/// # Examples
///
/// ```
/// use expath::path::resolve::collapse;
///
/// assert_eq!(collapse(&["", "a", "b", "..", ".", "c"]), Some(vec!["", "a", "c"]));
/// assert_eq!(collapse(&["..", "a"]), None);
/// assert_eq!(collapse(&["a", "..", "..", "b"]), None);
/// ```
#[must_use]
pub fn collapse<'a>(segments: &[&'a str]) -> Option<Vec<&'a str>> {
    let mut kept: Vec<&'a str> = Vec::with_capacity(segments.len());

    for &segment in segments {
        match segment {
            "." => {}
            ".." => {
                kept.pop()?;
            }
            other => kept.push(other),
        }
    }

    Some(kept)
}

/// Resolve `path` to canonical absolute form.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `path` is empty, and
/// [`Error::MalformedPath`] if:
/// - a `..` segment has no preceding segment to cancel
/// - every segment collapsed away
/// - the first remaining segment is not a root marker for `style`
///
/// # Examples
///
/// ```
/// use expath::path::{resolve::resolve, PathStyle};
///
/// assert_eq!(resolve("/a/./b/../c", PathStyle::Posix).unwrap(), "/a/c");
/// assert_eq!(resolve("/a/b/", PathStyle::Posix).unwrap(), "/a/b");
/// assert_eq!(resolve("c:/dir/../x", PathStyle::Windows).unwrap(), "c:\\x");
///
/// assert!(resolve("../a", PathStyle::Posix).is_err());
/// assert!(resolve("noroot/a", PathStyle::Windows).is_err());
/// ```
pub fn resolve(path: &str, style: PathStyle) -> Result<String> {
    if path.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "path must not be empty".to_string(),
        });
    }

    let normalized = normalize(path, style);
    let segments = split_segments(&normalized, style);
    let segments = collapse(&segments)
        .ok_or_else(|| Error::malformed(path, "'..' has no preceding segment to cancel"))?;

    let Some(&first) = segments.first() else {
        return Err(Error::malformed(
            path,
            "no segments remain after resolving '.' and '..'",
        ));
    };

    if !style.is_root_segment(first) {
        let reason = match style {
            PathStyle::Posix => "path does not start with '/'",
            PathStyle::Windows => "path does not start with a drive letter",
        };
        return Err(Error::malformed(path, reason));
    }

    if segments.len() == 1 {
        return Ok(style.render_root(first));
    }

    let mut buf = [0u8; 4];
    let sep: &str = style.separator().encode_utf8(&mut buf);
    Ok(segments.join(sep))
}

/// Check whether `path` is textually absolute for `style`.
///
/// A POSIX path is absolute when it starts with `/`. A Windows path is
/// absolute when it starts with a drive letter and a colon. No resolution or
/// filesystem access happens.
///
/// # Examples
///
/// ```
/// use expath::path::{resolve::is_absolute, PathStyle};
///
/// assert!(is_absolute("/usr", PathStyle::Posix));
/// assert!(!is_absolute("usr", PathStyle::Posix));
/// assert!(is_absolute("C:\\Windows", PathStyle::Windows));
/// assert!(!is_absolute("\\Windows", PathStyle::Windows));
/// ```
#[must_use]
pub fn is_absolute(path: &str, style: PathStyle) -> bool {
    match style {
        PathStyle::Posix => path.starts_with('/'),
        PathStyle::Windows => {
            let mut chars = path.chars();
            matches!(
                (chars.next(), chars.next()),
                (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
            )
        }
    }
}

/// Resolve `relative` against the absolute directory `base`.
///
/// The two are joined with a single separator and the result is resolved.
/// A `relative` that is itself absolute is still appended to `base`.
///
/// # Errors
///
/// Returns an error if the joined path cannot be resolved.
///
/// # Examples
///
/// ```
/// use expath::path::{resolve::resolve_against, PathStyle};
///
/// let resolved = resolve_against("/srv/app", "../data/./db", PathStyle::Posix).unwrap();
/// assert_eq!(resolved, "/srv/data/db");
/// ```
pub fn resolve_against(base: &str, relative: &str, style: PathStyle) -> Result<String> {
    let mut joined = String::with_capacity(base.len() + relative.len() + 1);
    joined.push_str(base);
    joined.push(style.separator());
    joined.push_str(relative);
    resolve(&joined, style)
}
