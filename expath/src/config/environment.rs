//! Environment variable handling for configuration overrides.
//!
//! This module provides support for EXPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::{parse_octal_mode, Config};
use crate::error::{Error, Result};
use crate::path::StyleSetting;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use expath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `EXPATH_STYLE`, `EXPATH_DIR_MODE` and `EXPATH_AUTO_RESOLVE`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(style) = env::var("EXPATH_STYLE") {
            let setting = StyleSetting::parse(&style).map_err(|message| Error::Validation {
                field: "EXPATH_STYLE".into(),
                message,
            })?;
            config.style = Some(setting);
        }

        if let Ok(mode) = env::var("EXPATH_DIR_MODE") {
            config.dir_mode = Some(parse_octal_mode(&mode).ok_or_else(|| Error::Validation {
                field: "EXPATH_DIR_MODE".into(),
                message: format!("Invalid octal mode: '{mode}'"),
            })?);
        }

        if let Ok(val) = env::var("EXPATH_AUTO_RESOLVE") {
            config.auto_resolve_join = Some(Self::parse_bool("EXPATH_AUTO_RESOLVE", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive)
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
