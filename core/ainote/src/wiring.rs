//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdEnvResolver, StdFileSystem};
use common::domain::VaultDir;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{
    ConsoleNotifier, ConsolePrompter, FsVault, JsonSettingsStore, OpenAiNoteGenerator,
};
use crate::ports::outbound::SettingsStore;
use crate::usecase::{CreateNoteUseCase, SettingsUseCase};

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    /// 構造化ログ（ファイルへ JSONL）。ユーザー向けの通知とは別。
    pub logger: Arc<dyn Log>,
    pub settings_use_case: SettingsUseCase,
}

impl App {
    /// 設定を読み込み、ノート作成ユースケースを組み立てる。
    /// `vault` 未指定時は EnvResolver で解決する。
    pub fn create_note_use_case(&self, vault: Option<PathBuf>) -> Result<CreateNoteUseCase, Error> {
        let settings = self.settings_use_case.load()?;
        let vault_dir = match vault {
            Some(dir) => VaultDir::new(dir),
            None => self.env_resolver.resolve_vault_dir()?,
        };
        let generator = OpenAiNoteGenerator::new(&settings, self.env_resolver.api_base_url());
        Ok(CreateNoteUseCase::new(
            Arc::new(FsVault::new(Arc::clone(&self.fs), vault_dir)),
            Arc::new(generator),
            Arc::new(ConsolePrompter),
            Arc::new(ConsoleNotifier),
            Arc::clone(&self.logger),
        ))
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_ainote() -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let home = env_resolver.resolve_home_dir()?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_file()));
    let store: Arc<dyn SettingsStore> =
        Arc::new(JsonSettingsStore::new(Arc::clone(&fs), home.settings_file()));
    Ok(App {
        fs,
        env_resolver,
        logger,
        settings_use_case: SettingsUseCase::new(store),
    })
}
