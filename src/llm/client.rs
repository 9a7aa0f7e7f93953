use super::{gemini::GeminiClient, openai::OpenAiClient};
use crate::{
    Result,
    config::{LlmConfig, Provider},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// A text-completion backend: one free-text prompt in, reply text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub fn build_client(config: &LlmConfig) -> Arc<dyn LlmClient> {
    info!(
        provider = ?config.provider,
        model = %config.model_id(),
        "Initializing LLM client"
    );

    match config.provider {
        Provider::Gemini => Arc::new(GeminiClient::new(config.clone())),
        Provider::OpenAi => Arc::new(OpenAiClient::new(config.clone())),
    }
}
