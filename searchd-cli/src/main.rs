//! searchd-setup: install the search daemon and its menu-bar helper as
//! launchd agents.
//!
//! # Usage
//!
//! ```text
//! searchd-setup [--project-dir <dir>]
//! searchd-setup install [--project-dir <dir>]
//! searchd-setup uninstall
//! searchd-setup status [--json]
//! searchd-setup logs [--lines N]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{install::InstallArgs, logs::LogsArgs, status::StatusArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "searchd-setup",
    version,
    about = "Install the search daemon and its menu-bar helper as launchd agents",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Used when no subcommand is given.
    #[command(flatten)]
    install: InstallArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// (Re-)install and start both services. This is the default.
    Install(InstallArgs),

    /// Stop both services and remove their descriptors. Config and logs stay.
    Uninstall,

    /// Show registration state and daemon heartbeat.
    Status(StatusArgs),

    /// Print recent daemon log lines.
    Logs(LogsArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    match cli.command {
        None => cli.install.run(),
        Some(Commands::Install(args)) => args.run(),
        Some(Commands::Uninstall) => commands::uninstall::run(),
        Some(Commands::Status(args)) => args.run(),
        Some(Commands::Logs(args)) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
