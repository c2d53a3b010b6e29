pub(crate) mod create_note;
pub(crate) mod settings;

pub(crate) use create_note::CreateNoteUseCase;
pub(crate) use settings::SettingsUseCase;
