use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::debug;

use super::message::ChatMessage;
use crate::config::Settings;
use crate::error::Error;

/// A remote chat-completion capability.
///
/// Given a model name and the ordered conversation, returns the text of the
/// generated reply.
pub trait ChatBackend {
    fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible `/v1/chat/completions` endpoints.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    /// Builds a client from resolved settings.
    ///
    /// Fails with [`Error::NotConfigured`] when the API key is blank.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        if settings.api_key.trim().is_empty() {
            return Err(Error::NotConfigured);
        }

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl ChatBackend for ChatClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = self.url();
        let chat_request = ChatCompletionRequest {
            model,
            messages,
            stream: false,
        };

        debug!(%url, model, messages = messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        first_choice_content(&body)
    }
}

/// Extracts the first candidate's text from a chat completion response body.
fn first_choice_content(body: &str) -> Result<String> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).context("Malformed chat completion response")?;

    let Some(choice) = response.choices.into_iter().next() else {
        bail!("API response contained no choices");
    };

    choice
        .message
        .content
        .context("API response choice has no message content")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn settings_with_key(api_key: &str) -> Settings {
        Settings {
            api_key: api_key.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            chunk_size: 2000,
            input_path: PathBuf::from("report.pdf"),
            output_path: None,
            target_language: "zh".to_string(),
            endpoint: "https://api.example.com/".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_first_choice_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "你好"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        assert_eq!(first_choice_content(body).unwrap(), "你好");
    }

    #[test]
    fn test_first_choice_content_no_choices() {
        let err = first_choice_content(r#"{"choices": []}"#).unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_first_choice_content_null_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(first_choice_content(body).is_err());
    }

    #[test]
    fn test_first_choice_content_malformed() {
        let err = first_choice_content("<html>Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("text")];
        let request = ChatCompletionRequest {
            model: "m",
            messages: &messages,
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "text");
    }

    #[test]
    fn test_new_rejects_blank_key() {
        let result = ChatClient::new(&settings_with_key("   "));
        assert!(matches!(result, Err(Error::NotConfigured)));
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = ChatClient::new(&settings_with_key("sk-test")).unwrap();
        assert_eq!(client.url(), "https://api.example.com/v1/chat/completions");
    }

    /// Reads one HTTP request (head and body) and answers with `status`/`body`.
    /// Returns the request head.
    async fn answer_once(listener: &TcpListener, status: &str, body: &str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];

        let head_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before request head");
            received.extend_from_slice(&buf[..n]);
            if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&received[..head_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().unwrap())
            })
            .unwrap_or(0);
        while received.len() < head_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before request body");
            received.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        head
    }

    #[tokio::test]
    async fn test_complete_over_http() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let ok = answer_once(
                &listener,
                "200 OK",
                r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}]}"#,
            )
            .await;
            let failed = answer_once(
                &listener,
                "500 Internal Server Error",
                r#"{"error":"boom"}"#,
            )
            .await;
            (ok, failed)
        });

        let mut settings = settings_with_key("sk-test");
        settings.endpoint = format!("http://{addr}");
        let client = ChatClient::new(&settings).unwrap();
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hello")];

        let reply = client.complete("test-model", &messages).await.unwrap();
        assert_eq!(reply, "hi");

        let err = client.complete("test-model", &messages).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("boom"), "{message}");

        let (ok_head, failed_head) = server.await.unwrap();
        for head in [&ok_head, &failed_head] {
            assert!(head.starts_with("POST /v1/chat/completions HTTP/1.1\r\n"), "{head}");
            assert!(
                head.to_ascii_lowercase()
                    .contains("authorization: bearer sk-test\r\n"),
                "{head}"
            );
        }
    }
}
