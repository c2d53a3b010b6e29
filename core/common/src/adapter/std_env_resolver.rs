//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{HomeDir, VaultDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 空文字列は未設定とみなす
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = non_empty_var("AINOTE_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(HomeDir::new(config_base.join("ainote")))
    }

    fn resolve_vault_dir(&self) -> Result<VaultDir, Error> {
        if let Some(vault) = non_empty_var("AINOTE_VAULT") {
            return Ok(VaultDir::new(PathBuf::from(vault)));
        }
        env::current_dir()
            .map(VaultDir::new)
            .map_err(|e| Error::env(format!("Failed to get current directory: {}", e)))
    }

    fn api_base_url(&self) -> Option<String> {
        non_empty_var("AINOTE_API_BASE_URL")
    }
}
