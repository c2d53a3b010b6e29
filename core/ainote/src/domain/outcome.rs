//! ノート作成コマンドの結果

/// 1 回の実行がどこで終わったか
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateNoteOutcome {
    /// トピック入力が空・キャンセル（通知なし）
    Cancelled,
    /// 既存ノートが見つかった（最初の一致の vault 相対パス）
    AlreadyExists { path: String },
    /// LLM 呼び出しの失敗（原因はログのみ）
    GenerationFailed,
    /// ノートを作成した
    Created { path: String, category: String },
}

impl CreateNoteOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::GenerationFailed => 1,
            _ => 0,
        }
    }
}
