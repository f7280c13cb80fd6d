//! Main entry point for the expath CLI.
//!
//! This is the command-line interface for the expath path utilities.
//! It provides commands for manipulating paths as text:
//! - `normalize`, `resolve`, `join`, `resolve-against`: path algebra
//! - `is-absolute`, `dirname`, `ext`: inspection
//! - `mkdirs`, `exists`, `exec-path`: filesystem helpers

use clap::Parser;
use expath_cli::cli::{Cli, Command};
use expath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log events through the same stderr logger
    expath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        style: cli.style,
        config: cli.config,
        format: cli.format,
    };

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::ResolveAgainst(cmd) => cmd.execute(&global),
        Command::IsAbsolute(cmd) => cmd.execute(&global),
        Command::Dirname(cmd) => cmd.execute(&global),
        Command::Ext(cmd) => cmd.execute(&global),
        Command::Mkdirs(cmd) => cmd.execute(&global),
        Command::Exists(cmd) => cmd.execute(&global),
        Command::ExecPath(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
