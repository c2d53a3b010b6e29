//! ユーザーとのやり取り Outbound ポート（テキスト入力・通知）

use common::error::Error;

/// 1 行のテキスト入力を求める
pub trait Prompter: Send + Sync {
    /// None は入力キャンセル（EOF 等）
    fn prompt(&self, message: &str) -> Result<Option<String>, Error>;
}

/// 一時的な通知メッセージを表示する
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
