//! Error types for searchd-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from descriptor rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error, including placeholders with no value.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading template overrides.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
