//! Outbound ポート: ユースケースが外界を使うための trait

pub mod interaction;
pub mod note_generator;
pub mod settings_store;
pub mod vault;

pub use interaction::{Notifier, Prompter};
pub use note_generator::NoteGenerator;
pub use settings_store::SettingsStore;
pub use vault::Vault;
