//! Style-bound path operations.
//!
//! This module provides the `PathResolver` type, which is the main interface
//! for path manipulation. It fixes a [`PathStyle`] once and applies it to
//! every operation, so callers never pass the style around themselves.

use crate::config::Config;
use crate::error::Result;
use crate::path::{components, join, normalize, resolve, PathStyle};

/// Applies path operations under a single [`PathStyle`].
///
/// # Examples
///
/// ```
/// use expath::path::{PathResolver, PathStyle};
///
/// let resolver = PathResolver::new().with_style(PathStyle::Posix);
///
/// assert_eq!(resolver.normalize("a//b"), "a/b");
/// assert_eq!(resolver.resolve("/a/b/../c").unwrap(), "/a/c");
/// assert_eq!(resolver.join("/a", &["b"], false).unwrap(), "/a/b");
/// assert_eq!(resolver.ext_name("/x/y.rs"), Some("rs"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathResolver {
    style: PathStyle,
}

impl PathResolver {
    /// Create a resolver for the native platform style.
    ///
    /// # Examples
    ///
    /// ```
    /// use expath::path::{PathResolver, PathStyle};
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(resolver.style(), PathStyle::native());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `style` instead of the native style.
    #[must_use]
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Create a resolver for the style selected in `config`.
    ///
    /// An unset style means native.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_style(config.style.unwrap_or_default().resolve())
    }

    /// The style this resolver applies.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Normalize separators. See [`normalize::normalize`].
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        normalize::normalize(path, self.style)
    }

    /// Resolve to canonical absolute form. See [`resolve::resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is empty or cannot be resolved.
    pub fn resolve(&self, path: &str) -> Result<String> {
        resolve::resolve(path, self.style)
    }

    /// Join components onto `base`. See [`join::join`].
    ///
    /// # Errors
    ///
    /// Returns an error if `auto_resolve` is set and resolution fails.
    pub fn join<S: AsRef<str>>(
        &self,
        base: &str,
        components: &[S],
        auto_resolve: bool,
    ) -> Result<String> {
        join::join(base, components, auto_resolve, self.style)
    }

    /// Resolve `relative` against `base`. See [`resolve::resolve_against`].
    ///
    /// # Errors
    ///
    /// Returns an error if the joined path cannot be resolved.
    pub fn resolve_against(&self, base: &str, relative: &str) -> Result<String> {
        resolve::resolve_against(base, relative, self.style)
    }

    /// Check whether `path` is textually absolute.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        resolve::is_absolute(path, self.style)
    }

    /// The directory part of `path`. See [`components::dirname`].
    #[must_use]
    pub fn dirname(&self, path: &str) -> String {
        components::dirname(path, self.style)
    }

    /// The extension of `path`. See [`components::ext_name`].
    #[must_use]
    pub fn ext_name<'a>(&self, path: &'a str) -> Option<&'a str> {
        components::ext_name(path, self.style)
    }
}
