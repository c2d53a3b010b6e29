//! ainote 共通ライブラリ
//!
//! エラー型・ドメイン Newtype・Outbound ポートと標準アダプタ・LLM クライアントを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLM クライアント
pub mod llm;
