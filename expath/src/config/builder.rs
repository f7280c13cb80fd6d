//! Builder for layered configuration.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use expath::config::{Config, ConfigBuilder};
/// use expath::path::StyleSetting;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         style: Some(StyleSetting::Posix),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.style, Some(StyleSetting::Posix));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also load `path`, above the user config file.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply EXPATH_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// Precedence, highest first: programmatic overrides, environment,
    /// explicit config file, user config file, defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            ConfigLoader::load_all(self.config_file.as_deref())?
        };

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
