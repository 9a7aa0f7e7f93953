mod client;
mod gemini;
mod openai;
mod types;

pub use client::{LlmClient, build_client};
pub use gemini::{GEMINI_API_BASE, GeminiClient};
pub use openai::OpenAiClient;
pub use types::*;
