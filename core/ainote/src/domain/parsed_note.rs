//! LLM 応答テキストのパース（カテゴリ行・タグ行・本文に分割）
//!
//! ラベルは行頭一致のみで判定する。本文中でラベルから始まる行も本文から取り除かれる。

pub const CATEGORY_LABEL: &str = "Категория:";
pub const TAGS_LABEL: &str = "Теги:";

/// パース結果（ノート書き込み後に捨てる）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedNote {
    /// 空文字列ならカテゴリなし
    pub category: String,
    /// 空要素もそのまま残す
    pub tags: Vec<String>,
    pub content: String,
}

impl ParsedNote {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();

        let category = lines
            .iter()
            .find_map(|l| l.strip_prefix(CATEGORY_LABEL))
            .map(|rest| rest.trim().to_string())
            .unwrap_or_default();

        let tags = lines
            .iter()
            .find_map(|l| l.strip_prefix(TAGS_LABEL))
            .map(|rest| rest.split(',').map(|t| t.trim().to_string()).collect())
            .unwrap_or_default();

        let content = lines
            .iter()
            .filter(|l| !l.starts_with(CATEGORY_LABEL) && !l.starts_with(TAGS_LABEL))
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        Self {
            category,
            tags,
            content,
        }
    }

    /// ノートファイルの中身（タグ行 + 空行 + 本文。タグが無ければ本文のみ）
    pub fn file_contents(&self) -> String {
        if self.tags.is_empty() {
            self.content.clone()
        } else {
            format!("{}\n\n{}", self.tags.join(" "), self.content)
        }
    }
}
