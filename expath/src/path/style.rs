//! Platform path styles.
//!
//! A [`PathStyle`] captures everything that differs between Windows-style and
//! POSIX-style paths: the canonical separator, which characters count as
//! separators, and what a root marker looks like. The style is picked once and
//! handed to every algorithm in [`crate::path`], so none of them branch on the
//! target platform themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The separator and root conventions used to interpret a path string.
///
/// # Examples
///
/// ```
/// use expath::path::PathStyle;
///
/// assert_eq!(PathStyle::Posix.separator(), '/');
/// assert_eq!(PathStyle::Windows.separator(), '\\');
///
/// assert!(PathStyle::Posix.is_root_segment(""));
/// assert!(PathStyle::Windows.is_root_segment("C:"));
/// assert!(!PathStyle::Windows.is_root_segment("noroot"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// Forward-slash separated, rooted at a leading `/`.
    Posix,
    /// Backslash separated, rooted at a drive letter such as `C:`.
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The canonical separator for this style.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments.
    ///
    /// Windows accepts both slashes. On POSIX a backslash is an ordinary
    /// file-name character.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Whether `segment`, as the first segment of a split path, marks the path
    /// as absolute.
    ///
    /// A POSIX path is rooted when it began with the separator, which leaves an
    /// empty first segment after splitting. A Windows path is rooted when its
    /// first segment is a drive letter followed by a colon.
    #[must_use]
    pub fn is_root_segment(self, segment: &str) -> bool {
        match self {
            Self::Posix => segment.is_empty(),
            Self::Windows => is_drive(segment),
        }
    }

    /// Render a path consisting of the root segment alone.
    ///
    /// The trailing separator keeps the rendered root absolute: `/` and `C:\`.
    #[must_use]
    pub fn render_root(self, segment: &str) -> String {
        let mut root = String::with_capacity(segment.len() + 1);
        root.push_str(segment);
        root.push(self.separator());
        root
    }

    /// The length in bytes of the root prefix at the start of `path`, if any.
    ///
    /// Used by routines that must not strip a root while trimming separators.
    pub(crate) fn root_prefix_len(self, path: &str) -> Option<usize> {
        match self {
            Self::Posix => path.starts_with('/').then_some(1),
            Self::Windows => {
                let drive = path.get(..2).filter(|d| is_drive(d))?;
                let rest = &path[drive.len()..];
                match rest.chars().next() {
                    Some(c) if self.is_separator(c) => Some(drive.len() + 1),
                    _ => Some(drive.len()),
                }
            }
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

fn is_drive(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic()
    )
}

/// A configurable choice of [`PathStyle`].
///
/// This is what configuration files, environment variables and the CLI
/// accept. `Native` defers to the compile-time platform.
///
/// # Examples
///
/// ```
/// use expath::path::{PathStyle, StyleSetting};
///
/// assert_eq!(StyleSetting::Windows.resolve(), PathStyle::Windows);
/// assert_eq!(StyleSetting::Native.resolve(), PathStyle::native());
/// assert_eq!(StyleSetting::parse("POSIX").unwrap(), StyleSetting::Posix);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    /// Use the style of the running platform.
    #[default]
    Native,
    /// Always use POSIX-style paths.
    #[value(alias = "unix")]
    Posix,
    /// Always use Windows-style paths.
    #[value(alias = "win")]
    Windows,
}

impl StyleSetting {
    /// Turn this setting into a concrete style.
    #[must_use]
    pub const fn resolve(self) -> PathStyle {
        match self {
            Self::Native => PathStyle::native(),
            Self::Posix => PathStyle::Posix,
            Self::Windows => PathStyle::Windows,
        }
    }

    /// Parse a setting name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}
