//! Is-absolute command implementation.
//!
//! Prints `true` or `false` and exits with status 1 for relative paths so
//! the command can be used directly in shell conditionals.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;

/// Check whether a path is absolute
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    pub path: String,
}

impl IsAbsoluteCommand {
    /// Execute the is-absolute command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);
        let absolute = resolver.is_absolute(&self.path);

        emit(global, self.path.as_str(), absolute)?;

        if absolute {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "'{}' is not an absolute {} path",
                self.path,
                resolver.style()
            )))
        }
    }
}
