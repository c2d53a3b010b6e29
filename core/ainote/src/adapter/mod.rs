//! アダプター（ainote 固有の Outbound ポート実装）

pub mod console;
pub mod fs_vault;
pub mod json_settings_store;
pub mod openai_note_generator;

pub use console::{ConsoleNotifier, ConsolePrompter};
pub use fs_vault::FsVault;
pub use json_settings_store::JsonSettingsStore;
pub use openai_note_generator::OpenAiNoteGenerator;
