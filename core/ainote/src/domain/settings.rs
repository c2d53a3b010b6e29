//! 永続化される設定（API キーとモデル名の 2 フィールド）

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4";

/// 設定。保存済みの値をデフォルトの上にマージして読み込む（欠けたキーはデフォルト）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Settings {
    /// 表示用に API キーを伏せる
    pub fn masked_api_key(&self) -> String {
        if self.openai_api_key.is_empty() {
            "(not set)".to_string()
        } else {
            let head: String = self.openai_api_key.chars().take(3).collect();
            format!("{}...", head)
        }
    }
}
