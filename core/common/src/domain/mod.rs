//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// 設定ホームディレクトリのパス（settings.json と logs/ を置く）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// 設定ファイルのパス
    pub fn settings_file(&self) -> PathBuf {
        self.0.join("settings.json")
    }

    /// 構造化ログ（JSONL）のパス
    pub fn log_file(&self) -> PathBuf {
        self.0.join("logs").join("ainote.jsonl")
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// ノートを格納する vault のルートディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultDir(PathBuf);

impl VaultDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for VaultDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for VaultDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for VaultDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
