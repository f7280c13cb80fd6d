//! Configuration file discovery and loading.
//!
//! This module handles locating and loading expath configuration files with
//! proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".expath";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use expath::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load all configuration files.
    ///
    /// Loads:
    /// 1. The user config at `~/.expath/config.yaml`, if it exists
    ///    (precedence 1)
    /// 2. `explicit`, if given (precedence 2). Unlike the user config, an
    ///    explicitly named file must exist.
    ///
    /// Sources are returned lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or if `explicit`
    /// does not exist.
    pub fn load_all(explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                let config = Self::load_file(&path)?;
                sources.push(ConfigSource {
                    path,
                    precedence: 1,
                    config,
                });
            }
        }

        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// The default data directory, `~/.expath`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn data_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(DATA_DIR_NAME))
    }

    /// The user configuration file path, `~/.expath/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}
