use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::ServiceKind;

pub const DAEMON_LABEL: &str = "com.searchdaemon.daemon";
pub const MENUBAR_LABEL: &str = "com.searchdaemon.menubar";

pub const CONFIG_FILE: &str = "config.yaml";
pub const DAEMON_LOG: &str = "daemon.log";
pub const HEARTBEAT_FILE: &str = "status.json";

/// Default config shipped inside a project checkout.
pub const PROJECT_CONFIG_TEMPLATE: &str = "config.example.yaml";
/// Directory inside a project checkout holding descriptor template overrides.
pub const PROJECT_TEMPLATE_DIR: &str = "launchd";

pub fn config_dir(home: &Path) -> PathBuf {
    home.join(".config").join("search-daemon")
}

pub fn config_path(home: &Path) -> PathBuf {
    config_dir(home).join(CONFIG_FILE)
}

pub fn cache_dir(home: &Path) -> PathBuf {
    home.join(".cache").join("search-mcp")
}

pub fn log_path(home: &Path) -> PathBuf {
    cache_dir(home).join(DAEMON_LOG)
}

pub fn heartbeat_path(home: &Path) -> PathBuf {
    cache_dir(home).join(HEARTBEAT_FILE)
}

pub fn launch_agents_dir(home: &Path) -> PathBuf {
    home.join("Library").join("LaunchAgents")
}

pub fn descriptor_path(home: &Path, kind: ServiceKind) -> PathBuf {
    launch_agents_dir(home).join(format!("{}.plist", kind.label()))
}

pub fn project_template_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_TEMPLATE_DIR)
}

/// Absolute, symlink-free form of the project checkout. Fails if it is missing.
pub fn resolve_project_dir(project_dir: &Path) -> Result<PathBuf, CoreError> {
    let resolved = project_dir
        .canonicalize()
        .map_err(|source| CoreError::ProjectDir {
            path: project_dir.to_path_buf(),
            source,
        })?;
    if !resolved.is_dir() {
        return Err(CoreError::ProjectDir {
            path: project_dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }
    Ok(resolved)
}
