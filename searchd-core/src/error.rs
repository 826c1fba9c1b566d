//! Error types for searchd-core.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can arise from path, tool and config operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The dependency manager is not on the search path.
    #[error("`{tool}` not found on PATH. Install it with:\n    {hint}")]
    ToolNotFound { tool: String, hint: &'static str },

    /// The project directory does not exist or cannot be resolved.
    #[error("project directory {path} is not accessible: {source}")]
    ProjectDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying I/O failure with the offending path attached.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited unsuccessfully.
    #[error("`{command}` failed ({status})")]
    CommandFailed { command: String, status: ExitStatus },
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
