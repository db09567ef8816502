// src/message.rs
use serde::{Deserialize, Serialize};

/// A validated `POST /api/chat` body. `message` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ChatResponse {
    pub fn reply(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), note: None }
    }

    pub fn with_note(reply: impl Into<String>, note: impl Into<String>) -> Self {
        Self { reply: reply.into(), note: Some(note.into()) }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub has_key: bool,
    pub demo_mode: bool,
}
