//! CLI error types.

use std::path::PathBuf;

use navmenu_config::ConfigError;
use navmenu_tree::LoadError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Load { path: PathBuf, source: LoadError },

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendering failed")]
    Render(#[from] std::fmt::Error),

    #[error("No navigation node with url `{0}`")]
    NotFound(String),
}
