//! Resolve command implementation.
//!
//! Prints the canonical absolute form of a path. Resolution is purely
//! textual: the path does not need to exist and symbolic links are not
//! followed.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, is_verbose, load_configuration, GlobalOptions};
use clap::Args;

/// Resolve a path to its canonical absolute form
#[derive(Args)]
pub struct ResolveCommand {
    /// Absolute path to resolve
    pub path: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);

        if is_verbose(&logger) {
            logger.info(&format!("Resolving with {} style", resolver.style()));
        }

        let resolved = resolver.resolve(&self.path)?;
        emit(global, self.path.as_str(), resolved)
    }
}
