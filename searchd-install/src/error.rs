//! Error types for searchd-install.

use std::path::PathBuf;

use thiserror::Error;

use searchd_core::CoreError;
use searchd_launchd::LaunchdError;
use searchd_renderer::RenderError;

/// Everything that aborts a provisioning run.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Precondition, config seeding or dependency sync failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Registering or starting a service failed.
    #[error("failed to register and start {label}: {source}")]
    Register {
        label: String,
        #[source]
        source: LaunchdError,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> InstallError {
    InstallError::Io {
        path: path.into(),
        source,
    }
}
