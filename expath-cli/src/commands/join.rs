//! Join command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, emit, load_configuration, GlobalOptions};
use clap::Args;
use serde::Serialize;

/// Join path components onto a base path
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(allow_hyphen_values = true)]
    pub base: String,

    /// Components to append, in order
    #[arg(required = true, allow_hyphen_values = true)]
    pub components: Vec<String>,

    /// Resolve the joined path
    #[arg(long, conflicts_with = "no_resolve")]
    pub resolve: bool,

    /// Return the concatenation without resolving
    #[arg(long)]
    pub no_resolve: bool,
}

#[derive(Serialize)]
struct JoinInput<'a> {
    base: &'a str,
    components: &'a [String],
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = build_resolver(&config);

        let auto_resolve = if self.resolve {
            true
        } else if self.no_resolve {
            false
        } else {
            config.auto_resolve_join.unwrap_or(false)
        };

        let joined = resolver.join(&self.base, &self.components, auto_resolve)?;
        let input = JoinInput {
            base: &self.base,
            components: &self.components,
        };
        emit(global, &input, joined)
    }
}
