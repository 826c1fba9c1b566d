//! `searchd-setup status`: launchd registration and daemon heartbeat.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde_json::{json, Value};
use tabled::{settings::Style, Table, Tabled};

use searchd_core::heartbeat::{FolderState, Liveness};
use searchd_install::{status, StatusReport};
use searchd_launchd::Launchctl;

/// Arguments for `searchd-setup status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ServiceRow {
    service: String,
    label: String,
    registered: String,
    descriptor: String,
}

#[derive(Tabled)]
struct FolderRow {
    folder: String,
    state: String,
    files: String,
    last_full_index: String,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let launchctl = Launchctl::for_current_user().context("cannot query launchd")?;
        let now = Utc::now();
        let report = status(&home, &launchctl, now);

        if self.json {
            let payload = to_json(&report, now);
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to render status JSON")?
            );
            return Ok(());
        }

        print_table(&report, now);
        Ok(())
    }
}

fn to_json(report: &StatusReport, now: DateTime<Utc>) -> Value {
    let services: Vec<Value> = report
        .services
        .iter()
        .map(|s| {
            json!({
                "service": s.kind.to_string(),
                "label": s.label,
                "registered": s.registered,
                "descriptor": s.descriptor.display().to_string(),
                "descriptor_present": s.descriptor_present,
            })
        })
        .collect();

    let heartbeat = match &report.heartbeat {
        Liveness::Alive(hb) => json!({
            "running": true,
            "pid": hb.daemon_pid,
            "updated_at": hb.updated_at.to_rfc3339(),
            "age_secs": hb.age(now).num_seconds(),
            "folders": hb.folders,
        }),
        Liveness::Stale { updated_at } => json!({
            "running": false,
            "updated_at": updated_at.to_rfc3339(),
        }),
        Liveness::Absent => json!({ "running": false }),
    };

    json!({ "services": services, "daemon": heartbeat })
}

fn print_table(report: &StatusReport, now: DateTime<Utc>) {
    let rows: Vec<ServiceRow> = report
        .services
        .iter()
        .map(|s| ServiceRow {
            service: s.kind.to_string(),
            label: s.label.to_string(),
            registered: if s.registered {
                "yes".green().to_string()
            } else {
                "no".red().to_string()
            },
            descriptor: if s.descriptor_present {
                s.descriptor.display().to_string()
            } else {
                "missing".bright_black().to_string()
            },
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    match &report.heartbeat {
        Liveness::Alive(hb) => {
            println!(
                "{} daemon running (pid {}, heartbeat {}s ago)",
                "■".green().bold(),
                hb.daemon_pid,
                hb.age(now).num_seconds()
            );
            if hb.folders.is_empty() {
                println!("No folders configured");
                return;
            }
            let folders: Vec<FolderRow> = hb
                .folders
                .iter()
                .map(|(path, folder)| FolderRow {
                    folder: path.clone(),
                    state: state_label(folder.state).to_string(),
                    files: format!("{}/{}", folder.indexed_files, folder.total_files),
                    last_full_index: folder
                        .last_full_index
                        .clone()
                        .unwrap_or_else(|| "never".to_string()),
                })
                .collect();
            let mut table = Table::new(folders);
            table.with(Style::rounded());
            println!("{table}");
        }
        Liveness::Stale { updated_at } => println!(
            "{} daemon not running (last heartbeat {})",
            "■".yellow().bold(),
            updated_at.to_rfc3339()
        ),
        Liveness::Absent => println!("{} daemon not running", "■".red().bold()),
    }
}

fn state_label(state: FolderState) -> &'static str {
    match state {
        FolderState::Scanning => "scanning",
        FolderState::Indexing => "indexing",
        FolderState::Watching => "fully indexed",
        FolderState::Unknown => "unknown",
    }
}
