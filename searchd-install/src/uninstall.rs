//! Remove both services. Config, logs and the project are left alone.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use searchd_core::paths::descriptor_path;
use searchd_core::ServiceKind;
use searchd_launchd::ServiceManager;

use crate::error::{io_err, InstallError};
use crate::install::quiesce;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedService {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub was_registered: bool,
    /// Descriptor path, if one existed and was deleted.
    pub descriptor_removed: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UninstallReport {
    pub services: Vec<RemovedService>,
}

/// Quiesce the menu-bar helper, then the daemon, and delete their descriptors.
pub fn uninstall(
    home: &Path,
    services: &dyn ServiceManager,
) -> Result<UninstallReport, InstallError> {
    let mut report = UninstallReport::default();
    for kind in ServiceKind::all().iter().rev() {
        let label = kind.label();
        let was_registered = quiesce(services, label);

        let descriptor = descriptor_path(home, *kind);
        let descriptor_removed = match fs::remove_file(&descriptor) {
            Ok(()) => {
                tracing::info!(service = %kind, path = %descriptor.display(), "removed descriptor");
                Some(descriptor)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(io_err(&descriptor, e)),
        };

        report.services.push(RemovedService {
            kind: *kind,
            label,
            was_registered,
            descriptor_removed,
        });
    }
    Ok(report)
}
