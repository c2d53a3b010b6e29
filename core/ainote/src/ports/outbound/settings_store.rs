//! 設定の読み込み・保存 Outbound ポート

use crate::domain::Settings;
use common::error::Error;

pub trait SettingsStore: Send + Sync {
    /// 保存済みの値をデフォルトにマージして返す（未保存ならデフォルト）
    fn load(&self) -> Result<Settings, Error>;

    fn save(&self, settings: &Settings) -> Result<(), Error>;

    /// 保存先の表示用文字列
    fn location(&self) -> String;
}
