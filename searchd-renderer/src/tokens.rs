//! Token values resolved by the installer and the per-kind token maps built
//! from them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use searchd_core::paths::{config_path, log_path};
use searchd_core::{ServiceKind, Token};

/// Placeholder → substituted text.
pub type TokenMap = BTreeMap<Token, String>;

/// Every value a descriptor may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValues {
    pub tool_path: PathBuf,
    pub project_dir: PathBuf,
    pub config_path: PathBuf,
    pub log_path: PathBuf,
}

impl TokenValues {
    /// Values for the standard layout under `home`.
    pub fn for_home(home: &Path, tool_path: &Path, project_dir: &Path) -> Self {
        TokenValues {
            tool_path: tool_path.to_path_buf(),
            project_dir: project_dir.to_path_buf(),
            config_path: config_path(home),
            log_path: log_path(home),
        }
    }

    pub fn get(&self, token: Token) -> &Path {
        match token {
            Token::ToolPath => &self.tool_path,
            Token::ProjectDir => &self.project_dir,
            Token::ConfigPath => &self.config_path,
            Token::LogPath => &self.log_path,
        }
    }

    /// Map restricted to the tokens `kind` declares.
    pub fn for_kind(&self, kind: ServiceKind) -> TokenMap {
        kind.tokens()
            .iter()
            .map(|token| (*token, self.get(*token).display().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> TokenValues {
        TokenValues::for_home(
            Path::new("/Users/tester"),
            Path::new("/opt/homebrew/bin/uv"),
            Path::new("/Users/tester/src/search-daemon"),
        )
    }

    #[test]
    fn daemon_map_has_all_four_tokens() {
        let map = values().for_kind(ServiceKind::Daemon);
        assert_eq!(map.len(), 4);
        assert_eq!(
            map[&Token::ConfigPath],
            "/Users/tester/.config/search-daemon/config.yaml"
        );
        assert_eq!(map[&Token::LogPath], "/Users/tester/.cache/search-mcp/daemon.log");
    }

    #[test]
    fn menubar_map_omits_config_and_log() {
        let map = values().for_kind(ServiceKind::MenuBar);
        assert_eq!(
            map.keys().copied().collect::<Vec<_>>(),
            vec![Token::ToolPath, Token::ProjectDir]
        );
    }
}
