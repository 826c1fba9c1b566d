use std::path::PathBuf;

use thiserror::Error;

/// Error surface for service registration.
#[derive(Debug, Error)]
pub enum LaunchdError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("launchd management is only supported on macOS")]
    Unsupported,

    #[error("launchd error: {0}")]
    Launchctl(String),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LaunchdError {
    LaunchdError::Io {
        path: path.into(),
        source,
    }
}
