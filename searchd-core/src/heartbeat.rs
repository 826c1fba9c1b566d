//! The daemon's `status.json` heartbeat.
//!
//! The daemon rewrites the file every few seconds. A heartbeat older than
//! [`STALE_AFTER_SECS`] means the daemon is gone even if the file is still there.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum heartbeat age, in seconds, still considered alive.
pub const STALE_AFTER_SECS: i64 = 12;

/// Per-folder indexing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderState {
    Scanning,
    Indexing,
    Watching,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderStatus {
    pub state: FolderState,
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub indexed_files: u64,
    #[serde(default)]
    pub current_file: Option<String>,
    #[serde(default)]
    pub last_full_index: Option<String>,
    #[serde(default)]
    pub collection: String,
}

/// Contents of `status.json`. Folders are keyed by absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonHeartbeat {
    pub daemon_pid: u32,
    #[serde(default)]
    pub daemon_started: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub folders: BTreeMap<String, FolderStatus>,
}

impl DaemonHeartbeat {
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.updated_at
    }
}

/// What the heartbeat file says about the daemon at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Liveness {
    Alive(DaemonHeartbeat),
    Stale { updated_at: DateTime<Utc> },
    /// Missing or unreadable file.
    Absent,
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        matches!(self, Liveness::Alive(_))
    }
}

/// Read and classify the heartbeat at `path` relative to `now`.
pub fn read_heartbeat(path: &Path, now: DateTime<Utc>) -> Liveness {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "no heartbeat");
            return Liveness::Absent;
        }
    };
    let heartbeat: DaemonHeartbeat = match serde_json::from_str(&raw) {
        Ok(hb) => hb,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "unparsable heartbeat");
            return Liveness::Absent;
        }
    };
    classify(heartbeat, now)
}

pub fn classify(heartbeat: DaemonHeartbeat, now: DateTime<Utc>) -> Liveness {
    if heartbeat.age(now) > Duration::seconds(STALE_AFTER_SECS) {
        Liveness::Stale {
            updated_at: heartbeat.updated_at,
        }
    } else {
        Liveness::Alive(heartbeat)
    }
}
