//! Dirname command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;

/// Print the directory part of a path
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    pub path: String,
}

impl DirnameCommand {
    /// Execute the dirname command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);
        let parent = resolver.dirname(&self.path);
        emit(global, self.path.as_str(), parent)
    }
}
