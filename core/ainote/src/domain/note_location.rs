//! ノートの保存先（vault 相対パス）

use crate::domain::Topic;

/// カテゴリから決まるフォルダとノートのパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLocation {
    /// カテゴリが空なら None（vault 直下）
    pub folder: Option<String>,
    pub path: String,
}

impl NoteLocation {
    pub fn new(name: &Topic, category: &str) -> Self {
        if category.is_empty() {
            Self {
                folder: None,
                path: format!("{}.md", name),
            }
        } else {
            Self {
                folder: Some(category.to_string()),
                path: format!("{}/{}.md", category, name),
            }
        }
    }
}
