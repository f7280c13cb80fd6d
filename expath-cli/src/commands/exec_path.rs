//! Exec-path command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;
use expath::{current_executable_path, executable_dir};

/// Print the path of the running executable
#[derive(Args)]
pub struct ExecPathCommand {
    /// Print the containing directory instead
    #[arg(long)]
    pub dir: bool,
}

impl ExecPathCommand {
    /// Execute the exec-path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);

        let path = if self.dir {
            executable_dir(&resolver)?
        } else {
            current_executable_path(&resolver)?
        };

        let input = if self.dir { "exec-dir" } else { "exec-path" };
        emit(global, input, path)
    }
}
