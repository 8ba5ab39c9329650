//! CLI error types.

use std::path::PathBuf;

use rw_config::ConfigError;
use rw_helpers::HelperError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Helper(#[from] HelperError),

    #[error("Invalid page manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(String),
}
