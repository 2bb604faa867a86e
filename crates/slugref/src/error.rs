//! CLI error types.

use slugref_config::ConfigError;
use slugref_refs::WriteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Write(#[from] WriteError),
}
