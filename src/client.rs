use reqwest::StatusCode;
use thiserror::Error;

use crate::models::chat::{ChatMessageRequest, ChatMessageResponse};

/// Failures that prevent classifying a chat-messages call at all.
///
/// A non-200 HTTP status is NOT an error here; it becomes
/// `ChatOutcome::Failed` so the probe can report it and move on to the next
/// workflow.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connect, timeout, TLS, etc.
    #[error("chat-messages request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered 200 but the body was not the expected JSON object.
    #[error("chat-messages returned 200 with an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// What a single chat-messages call produced.
#[derive(Debug)]
pub enum ChatOutcome {
    /// HTTP 200 with a parsed response body.
    Answered(ChatMessageResponse),
    /// Any other HTTP status; the body is kept as raw text.
    Failed { status: StatusCode, body: String },
}

impl ChatOutcome {
    /// Render the human-readable report the binary prints to stdout.
    pub fn render(&self) -> String {
        match self {
            ChatOutcome::Answered(resp) => {
                let full = serde_json::to_string_pretty(resp)
                    .unwrap_or_else(|_| "<unserializable response>".to_string());
                format!(
                    "request succeeded\nanswer:\n{}\n\nfull response:\n{}",
                    resp.answer_or_default(),
                    full
                )
            }
            ChatOutcome::Failed { status, body } => {
                format!(
                    "request failed, status code: {}\nerror body: {}",
                    status.as_u16(),
                    body
                )
            }
        }
    }
}

/// Thin client for the chat-messages endpoint of a Dify deployment.
///
/// One instance is shared across workflow probes; the bearer key is supplied
/// per call because each workflow has its own credential.
pub struct DifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl DifyClient {
    /// Build a client with an env-aware HTTP stack (timeout, proxies, UA).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(crate::util::build_http_client_from_env(), base_url)
    }

    /// Build a client around a caller-supplied `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn chat_messages_url(&self) -> String {
        format!("{}/chat-messages", self.base_url.trim_end_matches('/'))
    }

    /// Send one blocking-mode chat message authenticated with `key`.
    ///
    /// HTTP 200 parses the body into `ChatOutcome::Answered`; any other status
    /// is captured as `ChatOutcome::Failed` with the raw body text.
    pub async fn send_chat_message(
        &self,
        key: &str,
        request: &ChatMessageRequest,
    ) -> Result<ChatOutcome, ClientError> {
        let url = self.chat_messages_url();
        tracing::debug!(url = %url, "sending chat-messages probe");

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::OK {
            let parsed: ChatMessageResponse = resp.json().await.map_err(ClientError::Decode)?;
            tracing::info!("chat-messages probe answered");
            Ok(ChatOutcome::Answered(parsed))
        } else {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "chat-messages probe returned a non-200 status");
            Ok(ChatOutcome::Failed { status, body })
        }
    }
}
