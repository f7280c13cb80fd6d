//! Resolve-against command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;
use serde::Serialize;

/// Resolve a relative path against an absolute base directory
#[derive(Args)]
pub struct ResolveAgainstCommand {
    /// Absolute base directory
    pub base: String,

    /// Path relative to the base
    pub relative: String,
}

#[derive(Serialize)]
struct ResolveAgainstInput<'a> {
    base: &'a str,
    relative: &'a str,
}

impl ResolveAgainstCommand {
    /// Execute the resolve-against command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);
        let resolved = resolver.resolve_against(&self.base, &self.relative)?;
        let input = ResolveAgainstInput {
            base: &self.base,
            relative: &self.relative,
        };
        emit(global, &input, resolved)
    }
}
