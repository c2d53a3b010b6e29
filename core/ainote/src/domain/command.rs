//! ainote コマンドの enum（Command Pattern）

/// ainote の実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    /// ヘルプ表示
    Help,
    /// 現在の設定を表示
    ShowConfig,
    /// 設定を変更して保存（None のフィールドは変更しない）
    UpdateConfig {
        api_key: Option<String>,
        model: Option<String>,
    },
    /// ノート作成（topic が None なら対話的に入力を求める）
    CreateNote { topic: Option<String> },
}

impl NoteCommand {
    /// ログ用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ShowConfig => "show-config",
            Self::UpdateConfig { .. } => "update-config",
            Self::CreateNote { .. } => super::COMMAND_ID,
        }
    }
}
