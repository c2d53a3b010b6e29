//! vault（ノートの格納先）Outbound ポート
//!
//! usecase が vault に対して行うのは一覧・存在確認・フォルダ作成・ファイル作成のみ。

use crate::domain::VaultFile;
use common::error::Error;

/// ノート格納先の抽象
///
/// パスはすべて vault 相対で、区切りは `/`。
pub trait Vault: Send + Sync {
    /// すべての markdown ファイル（順序は実装が決める）
    fn markdown_files(&self) -> Result<Vec<VaultFile>, Error>;

    /// パスに何か（ファイルでもフォルダでも）存在するか
    fn exists(&self, path: &str) -> bool;

    fn create_folder(&self, path: &str) -> Result<(), Error>;

    /// 新規ファイルを作成する。既に存在する場合はエラー
    fn create_file(&self, path: &str, contents: &str) -> Result<(), Error>;
}
