use std::path::Path;

use crate::error::LaunchdError;

/// The OS service registry, keyed by label.
///
/// Implementations talk to a process-wide singleton; the installer only ever
/// calls them sequentially.
pub trait ServiceManager {
    /// Whether a service is currently registered under `label`.
    fn query(&self, label: &str) -> bool;

    /// Remove the registration for `label`, stopping the service.
    ///
    /// Callers treat failures as "already gone".
    fn unregister(&self, label: &str) -> Result<(), LaunchdError>;

    /// Register the descriptor at `descriptor` under `label` and start it.
    fn register_and_start(&self, label: &str, descriptor: &Path) -> Result<(), LaunchdError>;
}
