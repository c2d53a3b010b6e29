//! 環境変数解決 Outbound ポート
//!
//! 設定ホーム・vault・API ベース URL を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{HomeDir, VaultDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
pub trait EnvResolver: Send + Sync {
    /// 設定ホームディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. AINOTE_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/ainote
    /// 3. $HOME/.config/ainote
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// vault ディレクトリ（AINOTE_VAULT、なければカレントディレクトリ）
    fn resolve_vault_dir(&self) -> Result<VaultDir, Error>;

    /// Chat Completions のベース URL 上書き（AINOTE_API_BASE_URL）
    fn api_base_url(&self) -> Option<String>;
}
