use std::path::Path;
use std::process::{Command, Output};

use crate::error::{io_err, LaunchdError};
use crate::manager::ServiceManager;

/// [`ServiceManager`] backed by `launchctl` in the current user's GUI domain.
#[derive(Debug, Clone)]
pub struct Launchctl {
    domain: String,
}

impl Launchctl {
    /// Resolve `gui/<uid>` for the invoking user. Fails off macOS.
    pub fn for_current_user() -> Result<Self, LaunchdError> {
        ensure_macos()?;
        Ok(Launchctl {
            domain: launchctl_domain()?,
        })
    }

    pub fn with_domain(domain: impl Into<String>) -> Self {
        Launchctl {
            domain: domain.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// `gui/<uid>/<label>`
    pub fn service_target(&self, label: &str) -> String {
        format!("{}/{label}", self.domain)
    }

    /// Command an operator can run to inspect `label`.
    pub fn status_command(&self, label: &str) -> String {
        format!("launchctl print {}", self.service_target(label))
    }

    /// Command an operator can run to stop and unregister `label`.
    pub fn stop_command(&self, label: &str) -> String {
        format!("launchctl bootout {}", self.service_target(label))
    }
}

impl ServiceManager for Launchctl {
    fn query(&self, label: &str) -> bool {
        match launchctl_output(&["print".to_string(), self.service_target(label)]) {
            Ok(output) => output.status.success(),
            Err(err) => {
                tracing::warn!(label, error = %err, "launchctl query failed");
                false
            }
        }
    }

    fn unregister(&self, label: &str) -> Result<(), LaunchdError> {
        run_launchctl(vec!["bootout".to_string(), self.service_target(label)])
    }

    fn register_and_start(&self, label: &str, descriptor: &Path) -> Result<(), LaunchdError> {
        run_launchctl(vec![
            "bootstrap".to_string(),
            self.domain.clone(),
            descriptor.display().to_string(),
        ])?;
        run_launchctl(vec![
            "kickstart".to_string(),
            "-k".to_string(),
            self.service_target(label),
        ])
    }
}

#[cfg(target_os = "macos")]
fn ensure_macos() -> Result<(), LaunchdError> {
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn ensure_macos() -> Result<(), LaunchdError> {
    Err(LaunchdError::Unsupported)
}

fn launchctl_output(args: &[String]) -> Result<Output, LaunchdError> {
    tracing::debug!(args = ?args, "launchctl");
    Command::new("launchctl")
        .args(args)
        .output()
        .map_err(|e| io_err("launchctl", e))
}

fn run_launchctl(args: Vec<String>) -> Result<(), LaunchdError> {
    let output = launchctl_output(&args)?;
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Err(LaunchdError::Launchctl(format!(
        "launchctl {} failed (status {}): {} {}",
        args.join(" "),
        output.status,
        stdout,
        stderr
    )))
}

fn launchctl_domain() -> Result<String, LaunchdError> {
    let output = Command::new("id")
        .arg("-u")
        .output()
        .map_err(|e| io_err("id -u", e))?;
    if !output.status.success() {
        return Err(LaunchdError::Launchctl(format!(
            "failed to resolve current uid (status {})",
            output.status
        )));
    }

    let uid = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if uid.is_empty() {
        return Err(LaunchdError::Launchctl(
            "current uid from `id -u` was empty".to_string(),
        ));
    }
    Ok(format!("gui/{uid}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_commands_target_the_gui_domain() {
        let launchctl = Launchctl::with_domain("gui/501");
        assert_eq!(
            launchctl.service_target("com.searchdaemon.daemon"),
            "gui/501/com.searchdaemon.daemon"
        );
        assert_eq!(
            launchctl.status_command("com.searchdaemon.menubar"),
            "launchctl print gui/501/com.searchdaemon.menubar"
        );
        assert_eq!(
            launchctl.stop_command("com.searchdaemon.menubar"),
            "launchctl bootout gui/501/com.searchdaemon.menubar"
        );
    }

    #[test]
    fn unknown_label_reads_as_unregistered() {
        let launchctl = Launchctl::with_domain("gui/501");
        assert!(!launchctl.query("com.searchdaemon.not-installed"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn refuses_to_run_off_macos() {
        assert!(matches!(
            Launchctl::for_current_user(),
            Err(LaunchdError::Unsupported)
        ));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn resolves_numeric_gui_domain() {
        let launchctl = Launchctl::for_current_user().expect("launchctl on macOS");
        let uid = launchctl
            .domain()
            .strip_prefix("gui/")
            .expect("gui/ prefix");
        assert!(uid.chars().all(|c| c.is_ascii_digit()), "got: {uid}");
    }
}
