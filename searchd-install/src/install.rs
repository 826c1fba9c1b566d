//! The (re-)installation procedure.
//!
//! Steps run strictly in order and the first failure aborts the run:
//!
//! 1. resolve `uv` on `PATH`, canonicalise the project directory and render
//!    both descriptors in memory
//! 2. seed the config file if it does not exist yet
//! 3. create the log directory
//! 4. quiesce any prior daemon registration
//! 5. write the daemon descriptor
//! 6. `uv sync` in the project directory
//! 7. register and start the daemon
//! 8. quiesce any prior menu-bar registration
//! 9. write the menu-bar descriptor
//! 10. register and start the menu-bar helper
//!
//! Nothing is rolled back on failure. Every completed step is safe to repeat,
//! so re-running the installer is the recovery path.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use searchd_core::config::{ensure_config, ConfigSeed};
use searchd_core::paths::{
    cache_dir, descriptor_path, log_path, project_template_dir, resolve_project_dir,
};
use searchd_core::tool::TOOL_NAME;
use searchd_core::{resolve_tool, DependencySync, ServiceKind};
use searchd_launchd::ServiceManager;
use searchd_renderer::{Renderer, TokenValues};

use crate::error::{io_err, InstallError};
use crate::writer::write_descriptor;

/// Outcome for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub descriptor: PathBuf,
    /// A registration under this label existed and was replaced.
    pub replaced: bool,
    /// The descriptor content differs from the previous run's.
    pub descriptor_changed: bool,
}

/// Everything a successful run resolved and touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub tool_path: PathBuf,
    pub project_dir: PathBuf,
    pub config: ConfigSeed,
    pub log_path: PathBuf,
    pub services: Vec<ServiceReport>,
}

/// Drives one installation against injected collaborators.
pub struct Installer<'a> {
    home: PathBuf,
    project_dir: PathBuf,
    search_path: Option<OsString>,
    services: &'a dyn ServiceManager,
    deps: &'a dyn DependencySync,
}

impl<'a> Installer<'a> {
    /// Installer for `project_dir` under `home`, searching the process `PATH`.
    pub fn new(
        home: impl Into<PathBuf>,
        project_dir: impl Into<PathBuf>,
        services: &'a dyn ServiceManager,
        deps: &'a dyn DependencySync,
    ) -> Self {
        Installer {
            home: home.into(),
            project_dir: project_dir.into(),
            search_path: std::env::var_os("PATH"),
            services,
            deps,
        }
    }

    /// Replace the `PATH`-style list searched for `uv`.
    pub fn search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn install(&self) -> Result<InstallReport, InstallError> {
        // Preconditions: nothing on disk changes until these succeed.
        let cwd = std::env::current_dir().unwrap_or_else(|_| self.project_dir.clone());
        let tool_path = resolve_tool(TOOL_NAME, self.search_path.as_deref(), &cwd)?;
        let project_dir = resolve_project_dir(&self.project_dir)?;
        let renderer = Renderer::with_overrides(&project_template_dir(&project_dir))?;
        let values = TokenValues::for_home(&self.home, &tool_path, &project_dir);
        let rendered = ServiceKind::all()
            .iter()
            .map(|kind| renderer.render(*kind, &values).map(|content| (*kind, content)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(
            tool = %tool_path.display(),
            project = %project_dir.display(),
            "installing search daemon"
        );

        let config = ensure_config(&self.home, &project_dir)?;
        if !config.was_created() {
            tracing::info!(path = %config.path().display(), "keeping existing config");
        }

        let logs = cache_dir(&self.home);
        fs::create_dir_all(&logs).map_err(|e| io_err(&logs, e))?;

        let mut services = Vec::with_capacity(rendered.len());
        for (kind, content) in &rendered {
            let report = self.install_service(*kind, content, &tool_path, &project_dir)?;
            services.push(report);
        }

        Ok(InstallReport {
            tool_path,
            project_dir,
            config,
            log_path: log_path(&self.home),
            services,
        })
    }

    fn install_service(
        &self,
        kind: ServiceKind,
        content: &str,
        tool_path: &Path,
        project_dir: &Path,
    ) -> Result<ServiceReport, InstallError> {
        let label = kind.label();
        let replaced = quiesce(self.services, label);

        let descriptor = descriptor_path(&self.home, kind);
        let descriptor_changed = write_descriptor(&descriptor, content)?;
        tracing::info!(
            service = %kind,
            path = %descriptor.display(),
            changed = descriptor_changed,
            "wrote descriptor"
        );

        if kind == ServiceKind::Daemon {
            tracing::info!(project = %project_dir.display(), "installing daemon dependencies");
            self.deps.sync(tool_path, project_dir)?;
        }

        self.services
            .register_and_start(label, &descriptor)
            .map_err(|source| InstallError::Register {
                label: label.to_string(),
                source,
            })?;
        tracing::info!(service = %kind, label, "registered and started");

        Ok(ServiceReport {
            kind,
            label,
            descriptor,
            replaced,
            descriptor_changed,
        })
    }
}

/// Unregister `label` if it is registered. Returns whether it was.
///
/// An unregister failure means the registration vanished between query and
/// unregister, which is the state we want anyway.
pub(crate) fn quiesce(services: &dyn ServiceManager, label: &str) -> bool {
    if !services.query(label) {
        tracing::debug!(label, "no prior registration");
        return false;
    }
    tracing::info!(label, "stopping previous instance");
    if let Err(err) = services.unregister(label) {
        tracing::warn!(label, error = %err, "unregister failed; treating as already stopped");
    }
    true
}
