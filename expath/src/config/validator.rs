//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Largest accepted directory mode: permission bits plus setuid, setgid and
/// sticky.
pub const MAX_DIR_MODE: u32 = 0o7777;

/// Validates merged configuration.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `dir_mode` has bits outside
    /// [`MAX_DIR_MODE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use expath::config::{Config, ConfigValidator};
    ///
    /// let ok = Config { dir_mode: Some(0o755), ..Default::default() };
    /// assert!(ConfigValidator::validate(&ok).is_ok());
    ///
    /// let bad = Config { dir_mode: Some(0o17777), ..Default::default() };
    /// assert!(ConfigValidator::validate(&bad).is_err());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(mode) = config.dir_mode {
            Self::validate_dir_mode(mode)?;
        }
        Ok(())
    }

    /// Validate a directory mode on its own.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `mode` exceeds [`MAX_DIR_MODE`].
    pub fn validate_dir_mode(mode: u32) -> Result<()> {
        if mode > MAX_DIR_MODE {
            return Err(Error::Validation {
                field: "dir_mode".into(),
                message: format!("{mode:#o} exceeds {MAX_DIR_MODE:#o}"),
            });
        }
        Ok(())
    }
}
