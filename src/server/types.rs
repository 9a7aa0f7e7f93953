use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const HOME_MESSAGE: &str = "KCHATAI backend is running ✅";
pub const USAGE_HINT: &str = "Use POST with JSON: { 'message': 'your text' }";
pub const EMPTY_MESSAGE_REPLY: &str = "Please type a message first.";
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I couldn't generate a reply.";
pub const BACKEND_ERROR_REPLY: &str = "Server error while talking to AI. Try again.";

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsageHint {
    pub message: String,
}

impl ChatRequest {
    /// Parses a request body leniently: anything that is not an object with a
    /// string `message` yields an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn trimmed_message(&self) -> &str {
        self.message.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Failure of a chat request, mapped to the status code and fixed reply the
/// caller sees. The backend cause is never exposed.
#[derive(Debug)]
pub enum ChatError {
    EmptyMessage,
    Backend(crate::Error),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, reply) = match self {
            Self::EmptyMessage => (StatusCode::BAD_REQUEST, EMPTY_MESSAGE_REPLY),
            Self::Backend(_) => (StatusCode::INTERNAL_SERVER_ERROR, BACKEND_ERROR_REPLY),
        };

        (
            status,
            Json(ChatResponse {
                reply: reply.to_string(),
            }),
        )
            .into_response()
    }
}
