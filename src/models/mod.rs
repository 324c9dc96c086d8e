//! Data models for the Dify chat-messages API.
//!
//! This module groups one submodule:
//! - `chat`: Types representing the chat-messages request we send and the
//!   subset of the response the probe inspects.
//!
//! The probe consumes this wire format, it does not define it; keep the
//! shapes aligned with the Dify API documentation.

pub mod chat;

// Convenience re-exports for downstream users.
pub use chat::{ChatMessageRequest, ChatMessageResponse, ResponseMode};
