//! ノート本文生成 Outbound ポート（LLM 呼び出し）

use crate::domain::Topic;
use common::error::Error;

/// トピックから構造化ノートのテキストを生成する
pub trait NoteGenerator: Send + Sync {
    /// 生成テキスト（trim 済み）。HTTP 失敗・応答形式不正はすべて Err
    fn generate(&self, topic: &Topic) -> Result<String, Error>;
}
