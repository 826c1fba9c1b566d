//! `searchd-setup uninstall`

use anyhow::{Context, Result};
use colored::Colorize;

use searchd_install::uninstall;
use searchd_launchd::Launchctl;

pub fn run() -> Result<()> {
    let home = super::home()?;
    let launchctl = Launchctl::for_current_user().context("cannot manage launchd agents")?;
    let report = uninstall(&home, &launchctl).context("failed to uninstall services")?;

    for service in &report.services {
        match (&service.descriptor_removed, service.was_registered) {
            (None, false) => println!("  ·  {} was not installed", service.label),
            (Some(path), _) => println!("  ✎  {} removed ({})", service.label, path.display()),
            (None, true) => println!("  ✎  {} stopped", service.label),
        }
    }
    println!("{}", "✓ search-daemon uninstalled; config and logs were kept".green());
    Ok(())
}
