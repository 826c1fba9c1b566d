//! `searchd-setup install`: provision and start both launchd agents.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use searchd_core::config::{ConfigSeed, ConfigSource};
use searchd_core::UvSync;
use searchd_install::{InstallReport, Installer};
use searchd_launchd::Launchctl;

/// Arguments for `searchd-setup install`.
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Checkout of the search-daemon project. Defaults to the current directory.
    #[arg(long, env = "SEARCHD_PROJECT_DIR", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,
}

impl InstallArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;
        let project_dir = match self.project_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("could not determine current directory")?,
        };

        let launchctl = Launchctl::for_current_user().context("cannot manage launchd agents")?;
        let report = Installer::new(&home, &project_dir, &launchctl, &UvSync)
            .install()
            .context("installation failed")?;

        print_summary(&report, &launchctl);
        Ok(())
    }
}

fn print_summary(report: &InstallReport, launchctl: &Launchctl) {
    print!("{}", summary(report, launchctl));
}

fn summary(report: &InstallReport, launchctl: &Launchctl) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "✓ search-daemon installed".green().bold());
    let _ = writeln!(out, "  uv:       {}", report.tool_path.display());
    let _ = writeln!(out, "  project:  {}", report.project_dir.display());
    let _ = writeln!(out, "  config:   {}", config_line(&report.config));
    let _ = writeln!(out, "  log:      {}", report.log_path.display());
    for service in &report.services {
        let note = if service.replaced { " (replaced)" } else { "" };
        let _ = writeln!(
            out,
            "  {:<9} {}{}",
            format!("{}:", service.kind),
            service.descriptor.display(),
            note.bright_black()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Control".bold());
    for service in &report.services {
        let label = service.label;
        let _ = writeln!(out, "  {} status:  {}", service.kind, launchctl.status_command(label));
        let _ = writeln!(out, "  {} stop:    {}", service.kind, launchctl.stop_command(label));
    }
    let _ = writeln!(out, "  logs:            searchd-setup logs");
    out
}

fn config_line(seed: &ConfigSeed) -> String {
    match seed {
        ConfigSeed::Created { path, source } => {
            let from = match source {
                ConfigSource::Project(p) => p.display().to_string(),
                ConfigSource::Embedded => "built-in default".to_string(),
            };
            format!(
                "{} {}",
                path.display(),
                format!("(new, from {from}; edit it to choose folders)").yellow()
            )
        }
        ConfigSeed::Existing { path } => {
            format!("{} {}", path.display(), "(kept)".bright_black())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchd_core::paths::{DAEMON_LABEL, MENUBAR_LABEL};
    use searchd_core::ServiceKind;
    use searchd_install::ServiceReport;

    fn report() -> InstallReport {
        let agents = PathBuf::from("/Users/tester/Library/LaunchAgents");
        InstallReport {
            tool_path: PathBuf::from("/opt/homebrew/bin/uv"),
            project_dir: PathBuf::from("/Users/tester/src/search-daemon"),
            config: ConfigSeed::Existing {
                path: PathBuf::from("/Users/tester/.config/search-daemon/config.yaml"),
            },
            log_path: PathBuf::from("/Users/tester/.cache/search-mcp/daemon.log"),
            services: ServiceKind::all()
                .iter()
                .map(|kind| ServiceReport {
                    kind: *kind,
                    label: kind.label(),
                    descriptor: agents.join(format!("{}.plist", kind.label())),
                    replaced: *kind == ServiceKind::Daemon,
                    descriptor_changed: false,
                })
                .collect(),
        }
    }

    #[test]
    fn summary_lists_control_commands_for_both_services() {
        let text = summary(&report(), &Launchctl::with_domain("gui/501"));

        for label in [DAEMON_LABEL, MENUBAR_LABEL] {
            assert!(text.contains(&format!("launchctl print gui/501/{label}")), "{text}");
            assert!(text.contains(&format!("launchctl bootout gui/501/{label}")), "{text}");
        }
        assert!(text.contains(&format!("daemon status:  launchctl print gui/501/{DAEMON_LABEL}")));
        assert!(text.contains(&format!("menu bar stop:    launchctl bootout gui/501/{MENUBAR_LABEL}")));
        assert!(text.contains("searchd-setup logs"));
    }

    #[test]
    fn summary_shows_resolved_paths_and_kept_config() {
        let text = summary(&report(), &Launchctl::with_domain("gui/501"));

        assert!(text.contains("uv:       /opt/homebrew/bin/uv"));
        assert!(text.contains("project:  /Users/tester/src/search-daemon"));
        assert!(text.contains("/Users/tester/.config/search-daemon/config.yaml"));
        assert!(text.contains("(kept)"));
        assert!(text.contains("log:      /Users/tester/.cache/search-mcp/daemon.log"));
        assert!(text.contains("/Users/tester/Library/LaunchAgents/com.searchdaemon.menubar.plist"));
    }
}
