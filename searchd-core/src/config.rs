//! First-run seeding of the daemon config file.
//!
//! The file is created at most once. An existing file is never read, parsed
//! or rewritten, so user edits survive any number of installs.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{io_err, CoreError};
use crate::paths::{config_dir, config_path, PROJECT_CONFIG_TEMPLATE};

/// Default config compiled into the installer.
pub const EMBEDDED_DEFAULT: &str = include_str!("templates/config.example.yaml");

/// Where a freshly seeded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `config.example.yaml` from the project checkout.
    Project(PathBuf),
    /// [`EMBEDDED_DEFAULT`].
    Embedded,
}

/// Result of [`ensure_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSeed {
    Created { path: PathBuf, source: ConfigSource },
    Existing { path: PathBuf },
}

impl ConfigSeed {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSeed::Created { path, .. } | ConfigSeed::Existing { path } => path.as_path(),
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, ConfigSeed::Created { .. })
    }
}

/// Create the config directory and, if absent, the config file.
pub fn ensure_config(home: &Path, project_dir: &Path) -> Result<ConfigSeed, CoreError> {
    let dir = config_dir(home);
    fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

    let path = config_path(home);
    if path.exists() {
        return Ok(ConfigSeed::Existing { path });
    }

    let (content, source) = default_config(project_dir)?;

    // create_new keeps a concurrently created file intact.
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(ConfigSeed::Existing { path });
        }
        Err(e) => return Err(io_err(&path, e)),
    };
    file.write_all(&content).map_err(|e| io_err(&path, e))?;

    tracing::info!(path = %path.display(), "created default config; edit it to choose folders");
    Ok(ConfigSeed::Created { path, source })
}

fn default_config(project_dir: &Path) -> Result<(Vec<u8>, ConfigSource), CoreError> {
    let bundled = project_dir.join(PROJECT_CONFIG_TEMPLATE);
    if bundled.is_file() {
        let content = fs::read(&bundled).map_err(|e| io_err(&bundled, e))?;
        return Ok((content, ConfigSource::Project(bundled)));
    }
    Ok((EMBEDDED_DEFAULT.as_bytes().to_vec(), ConfigSource::Embedded))
}
