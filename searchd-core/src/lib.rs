//! search-daemon setup core: path conventions, service kinds, external tool
//! plumbing and the daemon's heartbeat file.
//!
//! - [`paths`]: where everything lives under the user's home
//! - [`types`]: [`ServiceKind`] and the descriptor [`Token`]s
//! - [`tool`]: `uv` lookup and dependency sync
//! - [`config`]: first-run config seeding
//! - [`heartbeat`]: reading `status.json`

pub mod config;
pub mod error;
pub mod heartbeat;
pub mod paths;
pub mod tool;
pub mod types;

pub use error::CoreError;
pub use heartbeat::{DaemonHeartbeat, FolderState, FolderStatus, Liveness};
pub use tool::{resolve_tool, DependencySync, UvSync};
pub use types::{ServiceKind, Token};
