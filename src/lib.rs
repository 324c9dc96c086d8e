#![forbid(unsafe_code)]
#![doc = r#"
Dify Probe

Send fixed smoke-test chat messages to a Dify conversational-workflow API and
report the responses for manual inspection.

Crate highlights
- Library: `DifyClient::send_chat_message` posts one blocking-mode request to
  `{DIFY_BASE_URL}/chat-messages` with a Bearer workflow key and classifies the
  result into a `ChatOutcome`.
- Binary: probes the two workflows configured via `WORKFLOW_1_KEY` and
  `WORKFLOW_2_KEY`, one after the other, and prints each outcome to stdout.
- Models: minimal request/response types for the chat-messages endpoint.

Modules
- `config`: Environment-driven configuration (workflow keys, base URL).
- `models`: Data structures for the chat-messages wire format.
- `client`: The probe client and outcome classification.
- `util`: Shared helpers (tracing init, env-aware HTTP client builder).

Note: this is a smoke tester, not an API wrapper; there are no retries and no
streaming support, by design of the probe.
"#]

pub mod client;
pub mod config;
pub mod models;
pub mod util;

// Re-export the primary types for ergonomic library use.
pub use crate::client::{ChatOutcome, ClientError, DifyClient};
pub use crate::config::{Config, ConfigError};

// Re-export model namespaces for convenience (downstream users can do `use dify_probe::chat`).
pub use crate::models::chat;
