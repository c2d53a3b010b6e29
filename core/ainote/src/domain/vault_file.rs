//! vault 内の markdown ファイル（読み取り専用のハンドル）

/// vault 相対パス（区切りは `/`）と拡張子を除いたファイル名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    pub path: String,
    pub basename: String,
}

impl VaultFile {
    /// vault 相対パスから basename を導出する（`Work/Foo.md` → `Foo`）
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path);
        let basename = name.strip_suffix(".md").unwrap_or(name).to_string();
        Self { path, basename }
    }
}
