//! ユーザー向けの通知・プロンプト文言

pub const TOPIC_PROMPT: &str = "Введите тему заметки:";
pub const GENERATION_FAILED: &str = "Ошибка при запросе AI";

pub fn existing_note(path: &str) -> String {
    format!("Найдено существующее: [[{}]]", path)
}

pub fn note_created(topic: &str, category: &str) -> String {
    if category.is_empty() {
        format!("Заметка по \"{}\" создана.", topic)
    } else {
        format!("Заметка по \"{}\" создана в {}.", topic, category)
    }
}
