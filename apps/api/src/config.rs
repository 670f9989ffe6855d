use anyhow::{Context, Result};

/// Default OpenRouter chat-completions endpoint.
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier sent to OpenRouter.
/// Overridable via OPENROUTER_MODEL — the model string is configuration, not logic.
pub const DEFAULT_MODEL: &str = "xiaomi/mimo-v2-flash";

/// Application configuration loaded from environment variables.
///
/// The provider API key is deliberately optional here: its absence is detected
/// per request and surfaced as a configuration-error response, so the service
/// still boots (and answers `GET /`) without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty()),
            openrouter_model: std::env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openrouter_base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENROUTER_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
