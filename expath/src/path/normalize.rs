//! Path separator normalization.
//!
//! Rewrites a path string so that it uses only the canonical separator of a
//! [`PathStyle`] and never contains two separators in a row. This is a purely
//! textual pass; `.` and `..` segments are left for [`crate::path::resolve`].

use crate::path::PathStyle;

/// Normalize the separators in `path`.
///
/// For Windows style every `/` becomes `\`. For both styles, runs of
/// separators collapse into a single canonical separator. An empty input
/// yields an empty output.
///
/// # Examples
///
/// ```
/// use expath::path::{normalize::normalize, PathStyle};
///
/// assert_eq!(normalize("a//b///c", PathStyle::Posix), "a/b/c");
/// assert_eq!(normalize("C:/dir//file", PathStyle::Windows), "C:\\dir\\file");
/// assert_eq!(normalize("a\\\\b", PathStyle::Windows), "a\\b");
/// assert_eq!(normalize("", PathStyle::Posix), "");
/// ```
#[must_use]
pub fn normalize(path: &str, style: PathStyle) -> String {
    let sep = style.separator();
    let mut out = String::with_capacity(path.len());
    let mut previous_was_separator = false;

    for c in path.chars() {
        if style.is_separator(c) {
            if !previous_was_separator {
                out.push(sep);
            }
            previous_was_separator = true;
        } else {
            out.push(c);
            previous_was_separator = false;
        }
    }

    out
}
