//! Provisioning procedures for the search daemon's launchd services.
//!
//! - [`install`]: the fail-fast, idempotent (re-)installation
//! - [`uninstall`]: quiesce both services and remove their descriptors
//! - [`status`]: registration, descriptor and heartbeat snapshot

pub mod error;
pub mod install;
pub mod status;
pub mod uninstall;
mod writer;

pub use error::InstallError;
pub use install::{InstallReport, Installer, ServiceReport};
pub use status::{status, ServiceState, StatusReport};
pub use uninstall::{uninstall, RemovedService, UninstallReport};
