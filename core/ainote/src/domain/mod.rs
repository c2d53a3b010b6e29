//! ainote 固有のドメイン型（型と不変条件）

pub mod command;
pub mod note_location;
pub mod notice;
pub mod outcome;
pub mod parsed_note;
pub mod settings;
pub mod topic;
pub mod vault_file;

pub use command::NoteCommand;
pub use note_location::NoteLocation;
pub use outcome::CreateNoteOutcome;
pub use parsed_note::ParsedNote;
pub use settings::Settings;
pub use topic::Topic;
pub use vault_file::VaultFile;

/// ノート作成コマンドの ID
pub const COMMAND_ID: &str = "ai-create-note";
/// ノート作成コマンドの表示名
pub const COMMAND_NAME: &str = "AI: создать заметку";
