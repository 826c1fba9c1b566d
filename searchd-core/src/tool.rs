//! Locating `uv` and running its dependency sync.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{io_err, CoreError};

/// Dependency manager the daemon's project is built with.
pub const TOOL_NAME: &str = "uv";

/// Remediation shown when [`TOOL_NAME`] is missing.
pub const TOOL_INSTALL_HINT: &str =
    "curl -LsSf https://astral.sh/uv/install.sh | sh   (or: brew install uv)";

/// Search `search_path` (a `PATH`-style list) for `name`.
///
/// Relative entries are resolved against `cwd`. Returns
/// [`CoreError::ToolNotFound`] when no executable matches.
pub fn resolve_tool(
    name: &str,
    search_path: Option<&OsStr>,
    cwd: &Path,
) -> Result<PathBuf, CoreError> {
    match which::which_in(name, search_path, cwd) {
        Ok(path) => {
            tracing::debug!(tool = name, path = %path.display(), "resolved tool");
            Ok(path)
        }
        Err(err) => {
            tracing::debug!(tool = name, error = %err, "tool lookup failed");
            Err(CoreError::ToolNotFound {
                tool: name.to_string(),
                hint: TOOL_INSTALL_HINT,
            })
        }
    }
}

/// Installs a project's runtime dependencies.
pub trait DependencySync {
    /// Run the sync with `project_dir` as working directory. Any failure is fatal.
    fn sync(&self, tool: &Path, project_dir: &Path) -> Result<(), CoreError>;
}

/// `uv sync` with inherited stdio so uv's own diagnostics reach the operator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UvSync;

impl DependencySync for UvSync {
    fn sync(&self, tool: &Path, project_dir: &Path) -> Result<(), CoreError> {
        let command = format!("{} sync", tool.display());
        tracing::debug!(%command, cwd = %project_dir.display(), "running dependency sync");

        let status = Command::new(tool)
            .arg("sync")
            .current_dir(project_dir)
            .status()
            .map_err(|e| io_err(tool, e))?;

        if status.success() {
            return Ok(());
        }
        Err(CoreError::CommandFailed { command, status })
    }
}
