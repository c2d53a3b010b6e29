//! ノート作成のユースケース
//!
//! トピック入力 → vault 検索 → LLM 生成 → パース → 書き込み → 通知 を 1 回ずつ順に行う。

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::domain::{notice, CreateNoteOutcome, NoteLocation, ParsedNote, Topic, VaultFile};
use crate::ports::outbound::{NoteGenerator, Notifier, Prompter, Vault};

/// basename に query を含むファイル（大文字小文字を区別しない部分一致、vault の順序を保つ）
pub fn search_vault(files: Vec<VaultFile>, query: &str) -> Vec<VaultFile> {
    let query = query.to_lowercase();
    files
        .into_iter()
        .filter(|f| f.basename.to_lowercase().contains(&query))
        .collect()
}

pub struct CreateNoteUseCase {
    vault: Arc<dyn Vault>,
    generator: Arc<dyn NoteGenerator>,
    prompter: Arc<dyn Prompter>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Log>,
}

impl CreateNoteUseCase {
    pub fn new(
        vault: Arc<dyn Vault>,
        generator: Arc<dyn NoteGenerator>,
        prompter: Arc<dyn Prompter>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            vault,
            generator,
            prompter,
            notifier,
            logger,
        }
    }

    /// `topic` が None なら入力を求める。vault への書き込み失敗はそのまま Err で返す。
    pub fn run(&self, topic: Option<String>) -> Result<CreateNoteOutcome, Error> {
        let input = match topic {
            Some(t) => Some(t),
            None => self.prompter.prompt(notice::TOPIC_PROMPT)?,
        };
        let Some(topic) = input.and_then(Topic::parse) else {
            return Ok(CreateNoteOutcome::Cancelled);
        };

        let existing = search_vault(self.vault.markdown_files()?, &topic);
        if let Some(first) = existing.into_iter().next() {
            self.log(
                LogRecord::new(LogLevel::Info, "existing note found")
                    .field("topic", topic.to_string())
                    .field("path", first.path.as_str()),
            );
            self.notifier.notify(&notice::existing_note(&first.path));
            return Ok(CreateNoteOutcome::AlreadyExists { path: first.path });
        }

        let text = match self.generator.generate(&topic) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                self.log_generation_failure(&topic, "empty completion");
                self.notifier.notify(notice::GENERATION_FAILED);
                return Ok(CreateNoteOutcome::GenerationFailed);
            }
            Err(e) => {
                self.log_generation_failure(&topic, &e.to_string());
                self.notifier.notify(notice::GENERATION_FAILED);
                return Ok(CreateNoteOutcome::GenerationFailed);
            }
        };

        let note = ParsedNote::parse(&text);
        let location = self.write_note(&topic, &note)?;
        self.log(
            LogRecord::new(LogLevel::Info, "note created")
                .field("path", location.path.as_str())
                .field("category", note.category.as_str())
                .field("tags", note.tags.len()),
        );
        self.notifier
            .notify(&notice::note_created(&topic, &note.category));

        Ok(CreateNoteOutcome::Created {
            path: location.path,
            category: note.category,
        })
    }

    /// カテゴリフォルダが無ければ作成してからノートを書き込む
    pub fn write_note(&self, name: &Topic, note: &ParsedNote) -> Result<NoteLocation, Error> {
        let location = NoteLocation::new(name, &note.category);
        if let Some(folder) = &location.folder {
            if !self.vault.exists(folder) {
                self.vault.create_folder(folder)?;
            }
        }
        self.vault
            .create_file(&location.path, &note.file_contents())?;
        Ok(location)
    }

    fn log_generation_failure(&self, topic: &Topic, cause: &str) {
        self.log(
            LogRecord::new(LogLevel::Warn, "note generation failed")
                .kind("llm")
                .field("topic", topic.to_string())
                .field("cause", cause),
        );
    }

    fn log(&self, record: LogRecord) {
        let record = if record.kind.is_none() {
            record.kind("usecase")
        } else {
            record
        };
        let _ = self.logger.log(&record.layer("usecase"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<VaultFile> {
        paths.iter().map(|p| VaultFile::from_path(*p)).collect()
    }

    #[test]
    fn test_search_vault_case_insensitive_substring() {
        let all = files(&["Work/Rust Notes.md", "cooking.md", "RUST.md", "Other/trust.md"]);
        let found = search_vault(all, "rust");
        let paths: Vec<&str> = found.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["Work/Rust Notes.md", "RUST.md", "Other/trust.md"]);
    }

    #[test]
    fn test_search_vault_matches_basename_only() {
        let all = files(&["Rust/intro.md"]);
        assert!(search_vault(all, "rust").is_empty());
    }

    #[test]
    fn test_search_vault_cyrillic() {
        let all = files(&["Работа/Квантовая Физика.md"]);
        assert_eq!(search_vault(all, "физика").len(), 1);
    }
}
