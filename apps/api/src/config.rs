use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required variables abort startup with a named error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the OpenRouter API. Required.
    pub openrouter_api_key: String,
    /// Base URL of the OpenAI-compatible completions endpoint.
    pub openrouter_base_url: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// `HTTP-Referer` attribution header required by OpenRouter.
    pub http_referer: String,
    /// `X-Title` attribution header shown on the OpenRouter dashboard.
    pub app_title: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?.trim().to_string(),
            openrouter_base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            model: std::env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| "deepseek/deepseek-chat-v3-0324:free".to_string()),
            http_referer: std::env::var("HTTP_REFERER")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            app_title: std::env::var("APP_TITLE")
                .unwrap_or_else(|_| "Resume Screener".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
