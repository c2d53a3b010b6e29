//! Chat Completions でノート本文を生成する NoteGenerator 実装

use crate::domain::{Settings, Topic};
use crate::ports::outbound::NoteGenerator;
use common::error::Error;
use common::llm::{ChatCompletionsClient, Message};

/// トピックを埋め込んだ固定テンプレート（カテゴリ行・タグ行・見出しから始まる本文を要求する）
pub fn prompt_for_topic(topic: &str) -> String {
    format!(
        "\nКатегория:\nТеги:\nСоздай структурированную заметку по теме: \"{}\" в формате:\nКатегория: <слово>\nТеги: #тег1, #тег2\n# Заголовок\n...текст...\n",
        topic
    )
}

pub struct OpenAiNoteGenerator {
    client: ChatCompletionsClient,
}

impl OpenAiNoteGenerator {
    pub fn new(settings: &Settings, base_url: Option<String>) -> Self {
        Self {
            client: ChatCompletionsClient::new(
                settings.openai_model.clone(),
                settings.openai_api_key.clone(),
                base_url,
            ),
        }
    }
}

impl NoteGenerator for OpenAiNoteGenerator {
    fn generate(&self, topic: &Topic) -> Result<String, Error> {
        let text = self.client.complete(&[Message::user(prompt_for_topic(topic))])?;
        if text.is_empty() {
            return Err(Error::json("Empty completion content"));
        }
        Ok(text)
    }
}
