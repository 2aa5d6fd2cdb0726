//! Error types for macspace-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::WorkspaceName;

/// Failures reading or writing the store file. These are fatal to a command.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store file exists but does not hold a valid document.
    #[error("failed to parse store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `dirs::home_dir()` returned `None`; `~/.macspace/` cannot be located.
    #[error("cannot determine home directory; set $HOME or pass --store")]
    HomeNotFound,
}

/// Expected, user-facing outcomes of registry operations.
///
/// None of these mutate the document; the CLI reports them and exits cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("workspace '{name}' not found")]
    NotFound { name: WorkspaceName },

    #[error("workspace '{name}' already exists")]
    AlreadyExists { name: WorkspaceName },

    #[error("none of the given apps are in workspace '{name}'")]
    NoMatchingApps { name: WorkspaceName },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
