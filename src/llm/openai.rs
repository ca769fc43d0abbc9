// OpenAI chat-completion adapter.
// API reference: https://platform.openai.com/docs/api-reference/chat

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::Config;
use crate::llm::Summarizer;
use crate::models::{AppError, AppResult};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Client for the chat-completion endpoint. Owns its key, base URL and HTTP
/// client; constructed once at startup and shared across requests.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai_timeout_secs))
            .build()?;

        let api_base = if config.openai_proxy.is_empty() {
            OPENAI_API_BASE.to_string()
        } else {
            config.openai_proxy.trim_end_matches('/').to_string()
        };

        Ok(Self {
            client,
            api_key: config.openai_key.clone(),
            api_base,
            model: config.openai_model.clone(),
        })
    }
}

#[async_trait]
impl Summarizer for OpenAiClient {
    async fn summarize(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_base);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "chat-completion request failed");
                AppError::Remote("summarization service unreachable".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "chat-completion API returned an error");

            // Upstream detail stays in the log; the caller only sees a
            // sanitized message.
            let msg = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    "summarization service rejected the configured credentials".to_string()
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    "summarization service is rate limiting requests".to_string()
                }
                _ => match serde_json::from_str::<ApiErrorResponse>(&body) {
                    Ok(parsed) => format!(
                        "summarization service returned an error: {}",
                        parsed.error.message
                    ),
                    Err(_) => format!("summarization service returned status {status}"),
                },
            };
            return Err(AppError::Remote(msg));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = %e, "chat-completion response did not match the expected shape");
            AppError::Remote("malformed response from summarization service".to_string())
        })?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Remote("summarization service returned no choices".to_string()))?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "summarize this",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "summarize this");
    }

    #[test]
    fn test_parses_first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"SUMMARY"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "SUMMARY");
    }

    #[test]
    fn test_proxy_overrides_api_base() {
        let mut config = test_config();
        config.openai_proxy = "https://proxy.example/v1/".to_string();
        let client = OpenAiClient::new(&config).unwrap();
        assert_eq!(client.api_base, "https://proxy.example/v1");

        config.openai_proxy.clear();
        let client = OpenAiClient::new(&config).unwrap();
        assert_eq!(client.api_base, OPENAI_API_BASE);
    }

    fn test_config() -> Config {
        Config {
            title: String::new(),
            description: String::new(),
            version: String::new(),
            cors_origins: vec!["*".to_string()],
            cors_allow_credentials: true,
            cors_allow_methods: vec!["*".to_string()],
            cors_allow_headers: vec!["*".to_string()],
            secret_key: String::new(),
            prefix: "/api".to_string(),
            openai_key: "sk-test".to_string(),
            openai_proxy: String::new(),
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_timeout_secs: 30,
            debug: false,
            log_level: 20,
        }
    }
}
