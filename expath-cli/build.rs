//! Build script for expath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("expath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, resolve and join filesystem paths")
        .long_about(
            "Command-line tool for textual path manipulation under POSIX or Windows conventions",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path style to apply (native, posix or windows)")
                .value_name("STYLE")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from this file in addition to ~/.expath/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("EXPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize path separators")
                .long_about("Map every separator to the canonical one and collapse runs"),
            Command::new("resolve")
                .about("Resolve a path to canonical absolute form")
                .long_about("Collapse '.' and '..' segments; fails when '..' escapes the root"),
            Command::new("join")
                .about("Join components onto a base path")
                .long_about("Append components with exactly one separator between them"),
            Command::new("resolve-against")
                .about("Resolve a relative path against a base directory")
                .long_about("Join a relative path onto an absolute base and resolve the result"),
            Command::new("is-absolute")
                .about("Check whether a path is absolute")
                .long_about("Exit 0 when the path starts with a root, 1 otherwise"),
            Command::new("dirname")
                .about("Print the directory part of a path")
                .long_about("Print everything before the final separator, keeping the root"),
            Command::new("ext")
                .about("Print the extension of a path")
                .long_about("Print the text after the last dot of the final component"),
            Command::new("mkdirs")
                .about("Create a directory and all missing ancestors")
                .long_about("Create missing directories from the outermost ancestor inward"),
            Command::new("exists")
                .about("Check whether a path exists")
                .long_about("Exit 0 when the path exists as a file or directory, 1 otherwise"),
            Command::new("exec-path")
                .about("Print the path of the running executable")
                .long_about("Print the resolved path of the expath binary or its directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("expath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
