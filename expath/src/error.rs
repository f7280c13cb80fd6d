//! Error types for the expath library.
//!
//! This module provides the error hierarchy for all path operations,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an expath error.
///
/// # Examples
///
/// ```
/// use expath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/local".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the expath library.
#[derive(Debug, Error)]
pub enum Error {
    /// Resolution could not produce a valid canonical path.
    ///
    /// Raised when a `..` segment has nothing to cancel, when the path has no
    /// valid root marker, or when every segment collapsed away.
    #[error("malformed path '{path}': {reason}")]
    MalformedPath {
        /// The path as it was given to the resolver.
        path: String,
        /// Why the path could not be resolved.
        reason: String,
    },

    /// A required input was empty or otherwise unusable.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// A description of the problem.
        reason: String,
    },

    /// A filesystem call on a specific path failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The path the failing call was made on.
        path: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The running executable's path could not be determined.
    #[error("cannot determine executable path: {source}")]
    ExecutablePath {
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file exists but could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigRead {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a resolution failure.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPath { .. })
    }

    /// Check if this error is an invalid argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this error came from an operating system call.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::ExecutablePath { .. })
    }

    /// Check if this error came from loading or validating configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::ConfigRead { .. } | Self::Validation { .. }
        )
    }
}
