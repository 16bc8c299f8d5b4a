//! LLM client — the single point of entry for all OpenRouter calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the completions API
//! directly. All LLM interactions go through this module.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OpenRouter API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned no completion content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single OpenRouter client shared by all handlers.
/// Wraps the OpenAI-compatible chat completions API with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    http_referer: String,
    app_title: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: config.openrouter_api_key.clone(),
            base_url: config.openrouter_base_url.clone(),
            model: config.model.clone(),
            http_referer: config.http_referer.clone(),
            app_title: config.app_title.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one user message and returns the completion text.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    ///
    /// Fails with `MissingApiKey` before any network I/O when the credential
    /// is empty.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .header("HTTP-Referer", &self.http_referer)
                .header("X-Title", &self.app_title)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: parse_error_message(&body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: parse_error_message(&body),
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return chat_response
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Pulls the human-readable message out of an OpenAI-style error body,
/// falling back to the raw body when it is not the expected JSON shape.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_key: &str) -> Config {
        Config {
            openrouter_api_key: api_key.to_string(),
            openrouter_base_url: "https://openrouter.invalid/api/v1".to_string(),
            model: "test-model".to_string(),
            http_referer: "http://localhost:8080".to_string(),
            app_title: "Resume Screener".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_parse_error_message_openai_shape() {
        let body = r#"{"error": {"message": "Invalid model", "code": 400}}"#;
        assert_eq!(parse_error_message(body), "Invalid model");
    }

    #[test]
    fn test_parse_error_message_falls_back_to_raw_body() {
        let body = "upstream proxy error";
        assert_eq!(parse_error_message(body), "upstream proxy error");
    }

    #[tokio::test]
    async fn test_empty_api_key_fails_before_network_io() {
        // Base URL is unroutable; an attempted request would error differently.
        let client = LlmClient::new(&test_config(""));
        let err = client.complete("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
