//! Configuration system for expath.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.expath/config.yaml`)
//! - An explicitly named YAML file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`EXPATH_STYLE`, `EXPATH_DIR_MODE`,
//!    `EXPATH_AUTO_RESOLVE`)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.expath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use expath::config::ConfigBuilder;
//! use expath::path::PathResolver;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let resolver = PathResolver::from_config(&config);
//! println!("Resolving with {} paths", resolver.style());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
