//! Textual path normalization, resolution and joining.
//!
//! Everything in this module operates on path strings without touching the
//! filesystem. The separator and root conventions come from a [`PathStyle`],
//! which is chosen once (usually through a [`PathResolver`]) rather than
//! branched on inside each algorithm.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization rewrites separators to the canonical one for the style and
//! collapses runs of separators. It never fails.
//!
//! ## Resolution
//!
//! Resolution normalizes, splits the path into segments and collapses `.` and
//! `..` left to right. The first surviving segment must be a root marker: the
//! empty segment before a leading `/` on POSIX, or a drive such as `C:` on
//! Windows. A `..` with nothing left to cancel is an error; there is no
//! fallback to the current directory.
//!
//! # Examples
//!
//! ```
//! use expath::path::{PathResolver, PathStyle};
//!
//! let posix = PathResolver::new().with_style(PathStyle::Posix);
//! assert_eq!(posix.resolve("/srv//app/./logs/..").unwrap(), "/srv/app");
//! assert!(posix.resolve("../escape").is_err());
//!
//! let windows = PathResolver::new().with_style(PathStyle::Windows);
//! assert_eq!(windows.resolve("C:/Users/me/../you").unwrap(), "C:\\Users\\you");
//! assert!(windows.resolve("Users\\me").is_err());
//! ```

pub mod components;
pub mod join;
pub mod normalize;
pub mod resolve;
pub mod resolver;
mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
pub use style::{PathStyle, StyleSetting};
