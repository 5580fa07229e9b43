//! Google Gemini `generateContent` client

use crate::error::{truncate_chars, AnalyzeError};
use crate::summarizer::Summarizer;
use async_trait::async_trait;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const MODEL_ENV: &str = "LOGDIGEST_MODEL";
pub const BASE_URL_ENV: &str = "LOGDIGEST_API_BASE";

const DEFAULT_MODEL: &str = "gemini-flash-latest";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read `GOOGLE_API_KEY`, plus optional model and endpoint overrides
    pub fn from_env() -> Result<Self, AnalyzeError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AnalyzeError::MissingApiKey(API_KEY_ENV))?;
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Whether an API key is present in the environment
pub fn api_key_configured() -> bool {
    std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty())
}

pub struct GeminiSummarizer {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiSummarizer {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": {"temperature": self.config.temperature}
        })
    }
}

/// Concatenate every text part of the first candidate
pub fn extract_text(body: &serde_json::Value) -> Option<String> {
    let parts = body.pointer("/candidates/0/content/parts")?.as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn classify_failure(status: u16, body: &str) -> AnalyzeError {
    let message = truncate_chars(body, MAX_ERROR_BODY_CHARS);
    if status == 429 || body.contains("RESOURCE_EXHAUSTED") {
        AnalyzeError::RateLimited(message)
    } else {
        AnalyzeError::Api { status, message }
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn summarize(&self, prompt: &str) -> Result<String, AnalyzeError> {
        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        extract_text(&value).ok_or(AnalyzeError::EmptyResponse)
    }
}
