//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DirnameCommand, ExecPathCommand, ExistsCommand, ExtCommand,
    IsAbsoluteCommand, JoinCommand, MkdirsCommand, NormalizeCommand, ResolveAgainstCommand,
    ResolveCommand,
};
use crate::utils::OutputFormat;
use clap::{Parser, Subcommand};
use expath::StyleSetting;
use std::path::PathBuf;

/// Command-line tool for normalizing, resolving and joining filesystem paths.
#[derive(Parser)]
#[command(name = "expath")]
#[command(version, about = "Normalize, resolve and join filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path style to apply (defaults to EXPATH_STYLE, then the running platform)
    #[arg(long, value_enum, value_name = "STYLE", global = true, ignore_case = true)]
    pub style: Option<StyleSetting>,

    /// Load configuration from this file in addition to ~/.expath/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "EXPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize path separators
    Normalize(NormalizeCommand),

    /// Resolve a path to canonical absolute form
    Resolve(ResolveCommand),

    /// Join components onto a base path
    Join(JoinCommand),

    /// Resolve a relative path against a base directory
    ResolveAgainst(ResolveAgainstCommand),

    /// Check whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Print the directory part of a path
    Dirname(DirnameCommand),

    /// Print the extension of a path
    Ext(ExtCommand),

    /// Create a directory and all missing ancestors
    Mkdirs(MkdirsCommand),

    /// Check whether a path exists
    Exists(ExistsCommand),

    /// Print the path of the running executable
    ExecPath(ExecPathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
