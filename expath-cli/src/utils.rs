//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, resolver construction and output
//! formatting.

use crate::error::CliError;
use clap::ValueEnum;
use expath::{Config, ConfigBuilder, LogLevel, Logger, PathResolver, StyleSetting};
use serde::Serialize;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path style requested on the command line.
    pub style: Option<StyleSetting>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Output format for command results.
    pub format: OutputFormat,
}

impl GlobalOptions {
    /// The logger matching the verbosity flags.
    pub fn logger(&self) -> Logger {
        expath::init_logger(self.verbose, self.quiet)
    }
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bare result, one value per line.
    #[default]
    Human,
    /// A JSON object with `input` and `output` fields.
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    if let Some(style) = global.style {
        builder = builder.with_config(Config {
            style: Some(style),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the resolver for this invocation from the merged configuration.
pub fn build_resolver(config: &Config) -> PathResolver {
    PathResolver::from_config(config)
}

/// The JSON shape written by `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a, I: Serialize + ?Sized, O: Serialize> {
    /// What the command was given.
    pub input: &'a I,
    /// What the command produced.
    pub output: O,
}

/// Print a command result in the requested format.
pub fn emit<I, O>(global: &GlobalOptions, input: &I, output: O) -> Result<(), CliError>
where
    I: Serialize + ?Sized,
    O: Serialize + std::fmt::Display,
{
    match global.format {
        OutputFormat::Human => println!("{output}"),
        OutputFormat::Json => {
            let report = Report { input, output };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

/// Whether informational lines should be printed to stderr.
pub fn is_verbose(logger: &Logger) -> bool {
    logger.level() >= LogLevel::Verbose
}
