//! OpenAI Chat Completions (/chat/completions) クライアント
//!
//! 1 リクエスト 1 レスポンスの同期呼び出しのみ。ストリーミング・リトライ・タイムアウト設定は持たない。

use crate::error::Error;
use crate::llm::message::Message;
use serde_json::{json, Value};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat Completions クライアント
pub struct ChatCompletionsClient {
    model: String,
    api_key: String,
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ChatCompletionsClient {
    /// * `model` - モデル名
    /// * `api_key` - Bearer トークン
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// リクエストボディ `{ model, messages }` を生成
    pub fn make_request_payload(&self, messages: &[Message]) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
        })
    }

    /// リクエストを送り、最初の choice の content（trim 済み）を返す
    pub fn complete(&self, messages: &[Message]) -> Result<String, Error> {
        let payload = self.make_request_payload(messages);
        let response = self
            .http
            .post(self.url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .body(payload.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(response_text);
            return Err(Error::http(format!(
                "Chat completions error: HTTP {}: {}",
                status, detail
            )));
        }

        parse_response_text(&response_text)
    }
}

/// `choices[0].message.content` を取り出して trim する
pub fn parse_response_text(response_json: &str) -> Result<String, Error> {
    let v: Value = serde_json::from_str(response_json)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
    v["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| Error::json("Response has no choices[0].message.content"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;

    /// 1 回だけ応答するスタブサーバ。受け取ったリクエスト全文を返す JoinHandle と URL を返す。
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, std::thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
                head.push_str(&line);
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }
            let mut req_body = vec![0u8; content_length];
            reader.read_exact(&mut req_body).unwrap();
            let mut stream = stream;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            head + &String::from_utf8(req_body).unwrap()
        });
        (format!("http://{}/v1", addr), handle)
    }

    /// スタブサーバ向け（環境のプロキシ設定を無視する）
    fn local_client(api_key: &str, url: String) -> ChatCompletionsClient {
        ChatCompletionsClient {
            http: reqwest::blocking::Client::builder().no_proxy().build().unwrap(),
            ..ChatCompletionsClient::new("gpt-4", api_key, Some(url))
        }
    }

    #[test]
    fn test_make_request_payload() {
        let c = ChatCompletionsClient::new("gpt-4", "sk-test", None);
        let payload = c.make_request_payload(&[Message::user("Hello")]);
        assert_eq!(payload["model"], "gpt-4");
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "Hello");
        assert!(payload.get("stream").is_none());
        assert_eq!(c.url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let c = ChatCompletionsClient::new("m", "k", Some("http://localhost:1234/v1/".to_string()));
        assert_eq!(c.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_parse_response_text() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"  Категория: X\nbody \n"}}]}"#;
        assert_eq!(parse_response_text(json).unwrap(), "Категория: X\nbody");
    }

    #[test]
    fn test_parse_response_text_missing_field() {
        assert!(matches!(parse_response_text(r#"{"choices":[]}"#), Err(Error::Json(_))));
        assert!(matches!(parse_response_text("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_complete_success_sends_bearer_and_body() {
        let (url, handle) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"choices":[{"message":{"content":" hello "}}]}"#,
        );
        let c = local_client("sk-abc", url);
        let text = c.complete(&[Message::user("topic")]).unwrap();
        assert_eq!(text, "hello");

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer sk-abc"));
        assert!(request.contains("\"model\":\"gpt-4\""));
        assert!(request.contains("\"content\":\"topic\""));
    }

    #[test]
    fn test_complete_non_success_is_http_error() {
        let (url, handle) = serve_once(
            "HTTP/1.1 401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key"}}"#,
        );
        let c = local_client("bad", url);
        let err = c.complete(&[Message::user("topic")]).unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.to_string().contains("Incorrect API key"));
        handle.join().unwrap();
    }
}
