//! Joining path components.

use crate::error::Result;
use crate::path::resolve::resolve;
use crate::path::PathStyle;

/// Append each of `components` to `base`, in order.
///
/// Before each component is appended, one canonical separator is inserted if
/// the accumulated path is non-empty and does not already end in a separator.
/// When `auto_resolve` is set the joined path is then passed through
/// [`resolve`].
///
/// # Errors
///
/// Only fails when `auto_resolve` is set and resolution fails.
///
/// # Examples
///
/// ```
/// use expath::path::{join::join, PathStyle};
///
/// assert_eq!(join("/a", &["b", "c"], false, PathStyle::Posix).unwrap(), "/a/b/c");
/// assert_eq!(join("/a/", &["b"], false, PathStyle::Posix).unwrap(), "/a/b");
/// assert_eq!(join("/a/b", &[".."], true, PathStyle::Posix).unwrap(), "/a");
/// assert_eq!(join("C:", &["dir"], false, PathStyle::Windows).unwrap(), "C:\\dir");
/// ```
pub fn join<S: AsRef<str>>(
    base: &str,
    components: &[S],
    auto_resolve: bool,
    style: PathStyle,
) -> Result<String> {
    let extra: usize = components.iter().map(|c| c.as_ref().len() + 1).sum();
    let mut joined = String::with_capacity(base.len() + extra);
    joined.push_str(base);

    for component in components {
        if joined.chars().next_back().is_some_and(|c| !style.is_separator(c)) {
            joined.push(style.separator());
        }
        joined.push_str(component.as_ref());
    }

    if auto_resolve {
        resolve(&joined, style)
    } else {
        Ok(joined)
    }
}
