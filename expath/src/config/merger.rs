//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use expath::config::{Config, ConfigMerger};
///
/// let low = Config { dir_mode: Some(0o755), ..Default::default() };
/// let high = Config { dir_mode: Some(0o700), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.dir_mode, Some(0o700));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target if set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }

        if source.dir_mode.is_some() {
            target.dir_mode = source.dir_mode;
        }

        if source.auto_resolve_join.is_some() {
            target.auto_resolve_join = source.auto_resolve_join;
        }
    }
}
