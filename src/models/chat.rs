use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed query sent by the smoke probe (kept verbatim so the remote workflow
/// receives the exact prompt it was validated against).
pub const SMOKE_QUERY: &str = "你好，请帮我写一个教学设计";

/// Fixed user identifier attached to every probe request.
pub const SMOKE_USER: &str = "test_user";

/// Fallback text printed when a 200 response carries no `answer` field.
pub const NO_ANSWER_FALLBACK: &str = "(no answer field in response)";

/// Response delivery mode understood by the chat-messages endpoint.
///
/// Uses lowercase serialization to match the Dify API:
/// "blocking" | "streaming"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Full response returned synchronously. The probe only ever sends this.
    Blocking,
    /// Incremental SSE stream. Part of the wire enum, unused by the probe.
    Streaming,
}

/// Request body for `POST {base_url}/chat-messages`.
///
/// Notes:
/// - `inputs` is a JSON object of workflow input variables; the smoke payload
///   sends it empty and lets the workflow fall back to its defaults.
/// - An empty `conversation_id` asks the service to open a new conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    pub inputs: serde_json::Map<String, serde_json::Value>,
    pub query: String,
    pub response_mode: ResponseMode,
    pub conversation_id: String,
    pub user: String,
}

impl ChatMessageRequest {
    /// The fixed payload the probe sends to every workflow:
    /// empty inputs, the smoke query, blocking mode, a fresh conversation,
    /// and the `test_user` identity.
    pub fn smoke() -> Self {
        Self {
            inputs: serde_json::Map::new(),
            query: SMOKE_QUERY.to_string(),
            response_mode: ResponseMode::Blocking,
            conversation_id: String::new(),
            user: SMOKE_USER.to_string(),
        }
    }
}

/// Response body of a successful (HTTP 200) chat-messages call.
///
/// Only `answer` is inspected; everything else the service returns is kept in
/// `extra` so the full object can be reprinted for debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ChatMessageResponse {
    /// The `answer` field, or the fallback text when the service omitted it.
    pub fn answer_or_default(&self) -> &str {
        self.answer.as_deref().unwrap_or(NO_ANSWER_FALLBACK)
    }
}
