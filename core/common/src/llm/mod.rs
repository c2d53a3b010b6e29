//! LLM クライアント
//!
//! OpenAI Chat Completions 互換 API への同期リクエストを提供します。

pub mod chat_completions;
pub mod message;

pub use chat_completions::{parse_response_text, ChatCompletionsClient, DEFAULT_BASE_URL};
pub use message::Message;
