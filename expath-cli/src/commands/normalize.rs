//! Normalize command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;

/// Canonicalize separators without resolving `.` or `..`
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    pub path: String,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);
        let normalized = resolver.normalize(&self.path);
        emit(global, self.path.as_str(), normalized)
    }
}
