//! Error types surfaced to the user.
//!
//! Every variant here ends up in a blocking message dialog; benign idle
//! states (duplicate adds, cancelled dialogs, invalid reorders) are not errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while saving or loading a workspace file.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("workspace file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("workspace file {} is not a JSON array of paths: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not access workspace file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not encode workspace: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Failure to hand an entry to the platform's default application.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Could not open the file: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}
