//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（vault・LLM・設定・端末）を使うための trait

pub mod inbound;
pub mod outbound;
