//! Exists command implementation.
//!
//! Exits with status 0 when the path exists (as the requested kind) and
//! 1 otherwise.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use expath::{FileSystem, OsFileSystem};

/// Check whether a path exists
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check
    pub path: String,

    /// Require the path to be a directory
    #[arg(long, conflicts_with = "file")]
    pub dir: bool,

    /// Require the path to be a regular file
    #[arg(long)]
    pub file: bool,
}

impl ExistsCommand {
    /// Execute the exists command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = OsFileSystem::new();

        let (found, kind) = if self.dir {
            (fs.is_dir(&self.path), "directory")
        } else if self.file {
            (fs.is_file(&self.path), "file")
        } else {
            (fs.is_dir(&self.path) || fs.is_file(&self.path), "path")
        };

        emit(global, self.path.as_str(), found)?;

        if found {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{kind} '{}' does not exist",
                self.path
            )))
        }
    }
}
