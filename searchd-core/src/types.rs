//! Service kinds and the placeholder tokens their descriptors consume.

use std::fmt;

use crate::paths::{DAEMON_LABEL, MENUBAR_LABEL};

/// A placeholder substituted into a service descriptor template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// Absolute path of the `uv` executable.
    ToolPath,
    /// Absolute path of the daemon's project checkout.
    ProjectDir,
    /// Absolute path of the daemon config file.
    ConfigPath,
    /// Absolute path of the daemon log file.
    LogPath,
}

impl Token {
    /// Name used inside templates, e.g. `{{ tool_path }}`.
    pub fn name(self) -> &'static str {
        match self {
            Token::ToolPath => "tool_path",
            Token::ProjectDir => "project_dir",
            Token::ConfigPath => "config_path",
            Token::LogPath => "log_path",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two launchd services the installer manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Daemon,
    MenuBar,
}

impl ServiceKind {
    /// Install order. Uninstall walks it in reverse.
    pub fn all() -> &'static [ServiceKind] {
        &[ServiceKind::Daemon, ServiceKind::MenuBar]
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Daemon => DAEMON_LABEL,
            ServiceKind::MenuBar => MENUBAR_LABEL,
        }
    }

    /// Exact token set the descriptor template of this kind may reference.
    pub fn tokens(self) -> &'static [Token] {
        match self {
            ServiceKind::Daemon => &[
                Token::ToolPath,
                Token::ProjectDir,
                Token::ConfigPath,
                Token::LogPath,
            ],
            ServiceKind::MenuBar => &[Token::ToolPath, Token::ProjectDir],
        }
    }

    /// Template file name, both embedded and as a project override.
    pub fn template_name(self) -> &'static str {
        match self {
            ServiceKind::Daemon => "daemon.plist.tera",
            ServiceKind::MenuBar => "menubar.plist.tera",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Daemon => f.write_str("daemon"),
            ServiceKind::MenuBar => f.write_str("menu bar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menubar_consumes_no_config_or_log_tokens() {
        let tokens = ServiceKind::MenuBar.tokens();
        assert!(!tokens.contains(&Token::ConfigPath));
        assert!(!tokens.contains(&Token::LogPath));
        assert_eq!(ServiceKind::Daemon.tokens().len(), 4);
    }

    #[test]
    fn labels_are_distinct() {
        assert_ne!(ServiceKind::Daemon.label(), ServiceKind::MenuBar.label());
    }
}
