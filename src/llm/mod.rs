// Summarization backend abstraction

pub mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;

use crate::models::AppResult;

/// A backend that turns a prompt into generated text. One blocking round
/// trip per call; no retries, no streaming.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> AppResult<String>;
}
