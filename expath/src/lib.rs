#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # expath
//!
//! A library for cross-platform, textual path manipulation.
//!
//! Paths are handled as strings under an explicit [`PathStyle`], so the same
//! code can reason about Windows paths on Linux and vice versa. Only the
//! [`fs`] module touches the disk.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: normalize, resolve, join and inspect paths under one style
//! - [`PathStyle`] and [`StyleSetting`]: separator and root conventions
//! - [`FileSystem`] and [`OsFileSystem`]: existence checks and directory creation
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use expath::{PathResolver, PathStyle};
//!
//! let resolver = PathResolver::new().with_style(PathStyle::Posix);
//!
//! assert_eq!(resolver.resolve("/srv/./app/../data").unwrap(), "/srv/data");
//! assert_eq!(resolver.join("/srv", &["app", "bin"], false).unwrap(), "/srv/app/bin");
//! assert_eq!(resolver.ext_name("/srv/app.tar.gz"), Some("gz"));
//! assert!(resolver.resolve("../outside").is_err());
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{
    current_executable_path, ensure_dir, executable_dir, mkdirs, FileSystem, OsFileSystem,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathResolver, PathStyle, StyleSetting};
