//! Mkdirs command implementation.
//!
//! Creates a directory and every missing ancestor. Relative paths are
//! resolved against the current working directory first.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, is_verbose, load_configuration, GlobalOptions};
use clap::Args;
use expath::config::schema::parse_octal_mode;
use expath::config::ConfigValidator;
use expath::{ensure_dir, OsFileSystem};
use std::env;

/// Create a directory and all missing ancestors
#[derive(Args)]
pub struct MkdirsCommand {
    /// Directory to create
    pub path: String,

    /// Permission bits for created directories, in octal (e.g. 755)
    #[arg(long, value_name = "OCTAL", value_parser = parse_mode)]
    pub mode: Option<u32>,
}

fn parse_mode(s: &str) -> Result<u32, String> {
    let mode = parse_octal_mode(s).ok_or_else(|| format!("'{s}' is not an octal mode"))?;
    ConfigValidator::validate_dir_mode(mode).map_err(|e| e.to_string())?;
    Ok(mode)
}

impl MkdirsCommand {
    /// Execute the mkdirs command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);

        let mut fs = OsFileSystem::from_config(&config);
        if let Some(mode) = self.mode {
            fs = fs.with_dir_mode(mode);
        }

        let target = if resolver.is_absolute(&self.path) {
            resolver.resolve(&self.path)?
        } else {
            let cwd = env::current_dir()?;
            let cwd = cwd.to_str().ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "current directory is not valid UTF-8: {}",
                    cwd.display()
                ))
            })?;
            resolver.resolve_against(cwd, &self.path)?
        };

        if is_verbose(&logger) {
            logger.info(&format!(
                "Ensuring {target} with mode {:#o}",
                fs.dir_mode()
            ));
        }

        ensure_dir(&fs, &resolver, &target)?;
        emit(global, self.path.as_str(), target)
    }
}
