//! Point-in-time view of both services and the daemon heartbeat.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use searchd_core::heartbeat::{read_heartbeat, Liveness};
use searchd_core::paths::{descriptor_path, heartbeat_path};
use searchd_core::ServiceKind;
use searchd_launchd::ServiceManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceState {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub registered: bool,
    pub descriptor: PathBuf,
    pub descriptor_present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub services: Vec<ServiceState>,
    pub heartbeat: Liveness,
}

pub fn status(home: &Path, manager: &dyn ServiceManager, now: DateTime<Utc>) -> StatusReport {
    let services = ServiceKind::all()
        .iter()
        .map(|kind| {
            let descriptor = descriptor_path(home, *kind);
            ServiceState {
                kind: *kind,
                label: kind.label(),
                registered: manager.query(kind.label()),
                descriptor_present: descriptor.is_file(),
                descriptor,
            }
        })
        .collect();

    StatusReport {
        services,
        heartbeat: read_heartbeat(&heartbeat_path(home), now),
    }
}
