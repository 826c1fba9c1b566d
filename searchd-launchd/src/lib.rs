//! launchd integration: the [`ServiceManager`] seam the installer drives and
//! its `launchctl` implementation.

mod error;
pub mod launchctl;
pub mod manager;

pub use error::LaunchdError;
pub use launchctl::Launchctl;
pub use manager::ServiceManager;
