use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use kchat_relay::{
    config::{LlmConfig, Provider},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

/// Create an LLM configuration pointing at a mock server
pub fn create_test_llm_config(provider: Provider, base_url: &str) -> LlmConfig {
    LlmConfig {
        provider,
        base_url: base_url.to_string(),
        model: "gemini-2.5-flash".to_string(),
        api_key_env: "GEMINI_API_KEY".to_string(),
        api_key: "test-api-key".to_string(),
    }
}

/// Build the full router around a mock backend
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    server::router(AppState::new(Arc::new(mock.clone())))
}

pub fn post_chat(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn post_chat_json(value: Value) -> Request<Body> {
    post_chat(value.to_string())
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// JSON subscriber writing into this capture; install with `tracing::subscriber::set_default`
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + use<> {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .json()
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
