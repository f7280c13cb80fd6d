//! Textual extraction of path components.
//!
//! These helpers look at the characters of a path only. They neither resolve
//! `.`/`..` nor check the filesystem.

use crate::path::PathStyle;

/// The extension of the final component of `path`.
///
/// Returns the text after the last `.`, provided that dot comes after the last
/// separator. Returns `None` when there is no such dot. A name ending in a dot
/// has an empty extension.
///
/// # Examples
///
/// ```
/// use expath::path::{components::ext_name, PathStyle};
///
/// assert_eq!(ext_name("/dir/file.tar.gz", PathStyle::Posix), Some("gz"));
/// assert_eq!(ext_name("/dir.ext/file", PathStyle::Posix), None);
/// assert_eq!(ext_name("/dir/file", PathStyle::Posix), None);
/// assert_eq!(ext_name("C:\\dir\\app.EXE", PathStyle::Windows), Some("EXE"));
/// ```
#[must_use]
pub fn ext_name(path: &str, style: PathStyle) -> Option<&str> {
    let dot = path.rfind('.')?;
    match path.rfind(|c| style.is_separator(c)) {
        Some(sep) if dot < sep => None,
        _ => Some(&path[dot + 1..]),
    }
}

/// The directory part of `path`.
///
/// Trailing separators are ignored, then everything from the last separator
/// on is removed. A path without a separator yields `.`. A root is never
/// removed: the parent of `/a` is `/` and the parent of `C:\a` is `C:\`.
///
/// # Examples
///
/// ```
/// use expath::path::{components::dirname, PathStyle};
///
/// assert_eq!(dirname("/usr/local/bin", PathStyle::Posix), "/usr/local");
/// assert_eq!(dirname("/usr/", PathStyle::Posix), "/");
/// assert_eq!(dirname("file.txt", PathStyle::Posix), ".");
/// assert_eq!(dirname("C:\\Windows", PathStyle::Windows), "C:\\");
/// ```
#[must_use]
pub fn dirname(path: &str, style: PathStyle) -> String {
    let is_sep = |c: char| style.is_separator(c);
    let root_len = style.root_prefix_len(path).unwrap_or(0);
    let root = &path[..root_len];

    let trimmed = path.trim_end_matches(is_sep);
    if trimmed.len() < root_len {
        return root.to_string();
    }

    let Some(last_sep) = trimmed.rfind(is_sep) else {
        return ".".to_string();
    };

    let head = trimmed[..last_sep].trim_end_matches(is_sep);
    if head.len() < root_len {
        root.to_string()
    } else {
        head.to_string()
    }
}
