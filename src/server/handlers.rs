use super::types::{
    ChatError, ChatRequest, ChatResponse, EMPTY_REPLY_FALLBACK, HOME_MESSAGE, USAGE_HINT,
    UsageHint,
};
use crate::llm::LlmClient;
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

pub async fn home() -> (StatusCode, &'static str) {
    (StatusCode::OK, HOME_MESSAGE)
}

pub async fn chat_usage() -> Json<UsageHint> {
    Json(UsageHint {
        message: USAGE_HINT.to_string(),
    })
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    let request = ChatRequest::from_body(&body);
    let message = request.trimmed_message();

    if message.is_empty() {
        debug!("Rejected chat request without a message");
        return Err(ChatError::EmptyMessage);
    }

    info!(message_len = message.len(), "Relaying chat message");

    match state.llm.generate(message).await {
        Ok(text) => {
            let reply = match text.trim() {
                "" => EMPTY_REPLY_FALLBACK.to_string(),
                trimmed => trimmed.to_string(),
            };
            info!(reply_len = reply.len(), "Relayed chat reply");
            Ok(Json(ChatResponse { reply }))
        }
        Err(e) => {
            error!("Error talking to the LLM backend: {}", e);
            Err(ChatError::Backend(e))
        }
    }
}
