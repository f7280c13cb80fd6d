//! Ext command implementation.
//!
//! Prints the extension of the final path component, without the dot.
//! A path with no extension is a semantic failure (exit code 1).

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;

/// Print the extension of a path
#[derive(Args)]
pub struct ExtCommand {
    /// Path to inspect
    pub path: String,
}

impl ExtCommand {
    /// Execute the ext command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);

        match resolver.ext_name(&self.path) {
            Some(ext) => emit(global, self.path.as_str(), ext),
            None => Err(CliError::SemanticFailure(format!(
                "'{}' has no extension",
                self.path
            ))),
        }
    }
}
