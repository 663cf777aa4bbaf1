use std::time::Duration;

/// Configuration for Google Generative Language API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API key (required)
/// - GEMINI_MODEL: model name (default: "gemini-2.0-flash")
/// - GEMINI_TIMEOUT_SECS: request timeout for the provider call
///   (default: 30; the upstream API itself is unbounded)
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .expect("GEMINI_API_KEY environment variable must be set");
        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
