//! settings.json に保存する SettingsStore 実装

use crate::domain::Settings;
use crate::ports::outbound::SettingsStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::PathBuf;
use std::sync::Arc;

pub struct JsonSettingsStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Settings::default());
        }
        let json = self.fs.read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| {
            Error::json(format!("Failed to parse '{}': {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &Settings) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        self.fs.write(&self.path, &json)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    fn store_in(dir: &std::path::Path) -> JsonSettingsStore {
        JsonSettingsStore::new(Arc::new(StdFileSystem), dir.join("config").join("settings.json"))
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(dir.path()).load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let settings = Settings {
            openai_api_key: "sk-1".to_string(),
            openai_model: "gpt-4o".to_string(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);

        let raw = std::fs::read_to_string(dir.path().join("config/settings.json")).unwrap();
        assert!(raw.contains("\"openaiApiKey\": \"sk-1\""));
    }

    #[test]
    fn test_load_partial_file_keeps_default_model() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(
            dir.path().join("config/settings.json"),
            r#"{"openaiApiKey":"sk-2"}"#,
        )
        .unwrap();
        let s = store_in(dir.path()).load().unwrap();
        assert_eq!(s.openai_api_key, "sk-2");
        assert_eq!(s.openai_model, "gpt-4");
    }

    #[test]
    fn test_load_broken_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(dir.path().join("config/settings.json"), "{").unwrap();
        assert!(matches!(store_in(dir.path()).load(), Err(Error::Json(_))));
    }
}
