//! ローカルディレクトリを vault とみなす Vault 実装

use crate::domain::VaultFile;
use crate::ports::outbound::Vault;
use common::domain::VaultDir;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// FileSystem ポート経由でディレクトリツリーを vault として扱う
pub struct FsVault {
    fs: Arc<dyn FileSystem>,
    root: VaultDir,
}

impl FsVault {
    pub fn new(fs: Arc<dyn FileSystem>, root: VaultDir) -> Self {
        Self { fs, root }
    }

    /// vault 相対パスを実パスにする。絶対パス・`..` を含むパスは vault の外を指すため拒否する
    fn resolve(&self, path: &str) -> Result<PathBuf, Error> {
        let rel = Path::new(path);
        let inside = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !inside {
            return Err(Error::io_msg(format!(
                "Path is outside the vault: '{}'",
                path
            )));
        }
        Ok(self.root.join(rel))
    }

    /// root からの相対パスを `/` 区切りにする
    fn relative(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(self.root.as_path()).ok()?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    fn collect(&self, dir: &Path, out: &mut Vec<VaultFile>) -> Result<(), Error> {
        for entry in self.fs.read_dir(dir)? {
            let hidden = entry
                .file_name()
                .map(|n| n.to_string_lossy().starts_with('.'))
                .unwrap_or(true);
            if hidden {
                continue;
            }
            let meta = self.fs.metadata(&entry)?;
            if meta.is_dir() {
                self.collect(&entry, out)?;
            } else if meta.is_file() && entry.extension().is_some_and(|e| e == "md") {
                if let Some(rel) = self.relative(&entry) {
                    out.push(VaultFile::from_path(rel));
                }
            }
        }
        Ok(())
    }
}

impl Vault for FsVault {
    fn markdown_files(&self) -> Result<Vec<VaultFile>, Error> {
        let mut files = Vec::new();
        self.collect(self.root.as_path(), &mut files)?;
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path)
            .map(|p| self.fs.exists(&p))
            .unwrap_or(false)
    }

    fn create_folder(&self, path: &str) -> Result<(), Error> {
        self.fs.create_dir_all(&self.resolve(path)?)
    }

    fn create_file(&self, path: &str, contents: &str) -> Result<(), Error> {
        self.fs.create_new(&self.resolve(path)?, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;
    use std::fs;

    fn vault_at(dir: &Path) -> FsVault {
        FsVault::new(Arc::new(StdFileSystem), VaultDir::new(dir))
    }

    #[test]
    fn test_markdown_files_recursive_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Work/Deep")).unwrap();
        fs::create_dir_all(dir.path().join(".obsidian")).unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("image.png"), "").unwrap();
        fs::write(dir.path().join("Work/Foo.md"), "").unwrap();
        fs::write(dir.path().join("Work/Deep/Bar.md"), "").unwrap();
        fs::write(dir.path().join(".obsidian/workspace.md"), "").unwrap();

        let files = vault_at(dir.path()).markdown_files().unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["Work/Deep/Bar.md", "Work/Foo.md", "a.md", "b.md"]);
        assert_eq!(files[1].basename, "Foo");
    }

    #[test]
    fn test_create_folder_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault_at(dir.path());
        assert!(!vault.exists("Work"));
        vault.create_folder("Work").unwrap();
        assert!(vault.exists("Work"));
        vault.create_file("Work/Foo.md", "#a\n\nbody").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("Work/Foo.md")).unwrap(),
            "#a\n\nbody"
        );
    }

    #[test]
    fn test_create_file_refuses_existing_note() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Foo.md"), "old").unwrap();
        let vault = vault_at(dir.path());
        assert!(vault.create_file("Foo.md", "new").is_err());
        assert_eq!(fs::read_to_string(dir.path().join("Foo.md")).unwrap(), "old");
    }

    #[test]
    fn test_exists_reports_plain_file_at_folder_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Work"), "not a folder").unwrap();
        let vault = vault_at(dir.path());
        assert!(vault.exists("Work"));
        assert!(vault.create_file("Work/Foo.md", "x").is_err());
    }

    #[test]
    fn test_absolute_category_stays_inside_vault() {
        let vault_dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let folder = outside.path().join("escaped").to_string_lossy().into_owned();
        let vault = vault_at(vault_dir.path());

        assert!(!vault.exists(&folder));
        let err = vault.create_folder(&folder).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        let note = format!("{}/Foo.md", folder);
        assert!(vault.create_file(&note, "x").is_err());
        assert!(!outside.path().join("escaped").exists());
    }

    #[test]
    fn test_parent_dir_paths_are_rejected() {
        let root = tempfile::tempdir().unwrap();
        let vault_path = root.path().join("vault");
        fs::create_dir_all(&vault_path).unwrap();
        fs::write(root.path().join("sibling.md"), "").unwrap();
        let vault = vault_at(&vault_path);

        assert!(!vault.exists("../sibling.md"));
        assert!(vault.create_file("../escaped.md", "x").is_err());
        assert!(vault.create_folder("Work/../../out").is_err());
        assert!(!root.path().join("escaped.md").exists());
        assert!(!root.path().join("out").exists());
    }
}
