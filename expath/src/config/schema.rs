//! Configuration schema definitions.
//!
//! This module defines the configuration structure for expath: which path
//! style to apply, how newly created directories are permissioned and how
//! joins behave by default.

use serde::{Deserialize, Deserializer, Serialize};

use crate::path::StyleSetting;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use expath::config::Config;
/// use expath::path::StyleSetting;
///
/// let config = Config {
///     style: Some(StyleSetting::Posix),
///     ..Default::default()
/// };
/// assert_eq!(config.dir_mode, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path style used for normalization and resolution.
    pub style: Option<StyleSetting>,

    /// Permission bits for directories created by `mkdirs`.
    ///
    /// Always read as octal: `755`, `"0755"` and `"0o750"` all work. A bare
    /// integer's digits are taken as octal digits, so YAML's own `0o` literal
    /// (which arrives as a decimal value) must be quoted.
    #[serde(default, deserialize_with = "deserialize_dir_mode")]
    pub dir_mode: Option<u32>,

    /// Whether joined paths are resolved unless asked otherwise.
    pub auto_resolve_join: Option<bool>,
}

/// Parse an octal permission string, with or without a `0o`/`0` prefix.
///
/// # Examples
///
/// ```
/// use expath::config::schema::parse_octal_mode;
///
/// assert_eq!(parse_octal_mode("755"), Some(0o755));
/// assert_eq!(parse_octal_mode("0o700"), Some(0o700));
/// assert_eq!(parse_octal_mode("0750"), Some(0o750));
/// assert_eq!(parse_octal_mode("8"), None);
/// ```
#[must_use]
pub fn parse_octal_mode(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0o")
        .or_else(|| s.strip_prefix("0O"))
        .unwrap_or(s);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 8).ok()
}

fn deserialize_dir_mode<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Number(u32),
        String(String),
    }

    match Option::<Helper>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Helper::Number(n)) => parse_octal_mode(&n.to_string())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("Invalid octal mode: {n}"))),
        Some(Helper::String(s)) => parse_octal_mode(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("Invalid octal mode: {s}"))),
    }
}
