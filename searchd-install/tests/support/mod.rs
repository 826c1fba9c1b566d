//! In-memory launchd + uv stand-ins and a scratch machine layout.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use searchd_core::{CoreError, DependencySync};
use searchd_launchd::{LaunchdError, ServiceManager};
use tempfile::TempDir;

/// Registry keyed by label, holding the descriptor text seen at registration.
///
/// Like launchd, registering an already-registered label fails.
#[derive(Default)]
pub struct FakeLaunchd {
    pub registered: RefCell<BTreeMap<String, String>>,
    pub events: RefCell<Vec<String>>,
    /// Next unregister finds the entry already gone and errors.
    pub vanish_on_unregister: RefCell<bool>,
    pub fail_sync: RefCell<bool>,
}

impl FakeLaunchd {
    pub fn labels(&self) -> Vec<String> {
        self.registered.borrow().keys().cloned().collect()
    }

    pub fn descriptor_of(&self, label: &str) -> Option<String> {
        self.registered.borrow().get(label).cloned()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn preregister(&self, label: &str, content: &str) {
        self.registered
            .borrow_mut()
            .insert(label.to_string(), content.to_string());
    }
}

impl ServiceManager for FakeLaunchd {
    fn query(&self, label: &str) -> bool {
        self.events.borrow_mut().push(format!("query {label}"));
        self.registered.borrow().contains_key(label)
    }

    fn unregister(&self, label: &str) -> Result<(), LaunchdError> {
        self.events.borrow_mut().push(format!("unregister {label}"));
        let removed = self.registered.borrow_mut().remove(label);
        if self.vanish_on_unregister.replace(false) || removed.is_none() {
            return Err(LaunchdError::Launchctl(format!(
                "Boot-out failed: 3: No such process ({label})"
            )));
        }
        Ok(())
    }

    fn register_and_start(&self, label: &str, descriptor: &Path) -> Result<(), LaunchdError> {
        self.events.borrow_mut().push(format!("register {label}"));
        let content = fs::read_to_string(descriptor).map_err(|e| {
            LaunchdError::Launchctl(format!("cannot read {}: {e}", descriptor.display()))
        })?;
        let mut registered = self.registered.borrow_mut();
        if registered.contains_key(label) {
            return Err(LaunchdError::Launchctl(format!(
                "Bootstrap failed: 5: Input/output error ({label} already loaded)"
            )));
        }
        registered.insert(label.to_string(), content);
        Ok(())
    }
}

impl DependencySync for FakeLaunchd {
    fn sync(&self, tool: &Path, project_dir: &Path) -> Result<(), CoreError> {
        self.events
            .borrow_mut()
            .push(format!("sync {} in {}", tool.display(), project_dir.display()));
        if *self.fail_sync.borrow() {
            return Err(CoreError::CommandFailed {
                command: format!("{} sync", tool.display()),
                status: ExitStatus::from_raw(1 << 8),
            });
        }
        Ok(())
    }
}

/// Home directory, project checkout and a `PATH` holding a fake `uv`.
pub struct Machine {
    pub home: TempDir,
    pub workspace: TempDir,
    pub bin: TempDir,
    pub project: PathBuf,
}

impl Machine {
    pub fn new() -> Self {
        let home = TempDir::new().expect("home");
        let workspace = TempDir::new().expect("workspace");
        let bin = TempDir::new().expect("bin");

        let uv = bin.path().join("uv");
        fs::write(&uv, "#!/bin/sh\nexit 0\n").expect("write uv");
        fs::set_permissions(&uv, fs::Permissions::from_mode(0o755)).expect("chmod uv");

        let project = workspace.path().join("search-daemon");
        fs::create_dir_all(&project).expect("project dir");

        Machine {
            home,
            workspace,
            bin,
            project,
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn search_path(&self) -> Option<OsString> {
        Some(self.bin.path().as_os_str().to_os_string())
    }

    pub fn uv(&self) -> PathBuf {
        self.bin.path().join("uv")
    }

    /// Move the project checkout and return its new location.
    pub fn move_project(&mut self, name: &str) -> PathBuf {
        let target = self.workspace.path().join(name);
        fs::rename(&self.project, &target).expect("move project");
        self.project = target.clone();
        target
    }
}
