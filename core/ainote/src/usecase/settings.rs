//! 設定の表示・更新のユースケース

use common::error::Error;
use std::sync::Arc;

use crate::domain::Settings;
use crate::ports::outbound::SettingsStore;

pub struct SettingsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl SettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Settings, Error> {
        self.store.load()
    }

    /// 表示用の行（パス・モデル・伏せた API キー）
    pub fn describe(&self) -> Result<Vec<String>, Error> {
        let settings = self.store.load()?;
        Ok(vec![
            format!("settings: {}", self.store.location()),
            format!("openaiModel: {}", settings.openai_model),
            format!("openaiApiKey: {}", settings.masked_api_key()),
        ])
    }

    /// 指定されたフィールドだけ変更して保存する
    pub fn update(
        &self,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Settings, Error> {
        if api_key.is_none() && model.is_none() {
            return Err(Error::invalid_argument("Nothing to update"));
        }
        let mut settings = self.store.load()?;
        if let Some(key) = api_key {
            settings.openai_api_key = key;
        }
        if let Some(model) = model {
            settings.openai_model = model;
        }
        self.store.save(&settings)?;
        Ok(settings)
    }
}
