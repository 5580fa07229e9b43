/// Shown to the user when the summarizer is throttling requests
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit hit. Please wait a minute and try again.";

const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("rate limited (429 RESOURCE_EXHAUSTED): {0}")]
    RateLimited(String),
    #[error("summarizer returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("summarizer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not decode summarizer response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("summarizer response contained no text")]
    EmptyResponse,
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
    #[error("{0}")]
    Other(String),
}

impl AnalyzeError {
    pub fn is_rate_limit(&self) -> bool {
        if matches!(self, AnalyzeError::RateLimited(_)) {
            return true;
        }
        let text = self.to_string();
        text.contains("429") || text.contains("RESOURCE_EXHAUSTED")
    }

    /// Message carried by the `error` progress event
    pub fn user_message(&self) -> String {
        if self.is_rate_limit() {
            return RATE_LIMIT_MESSAGE.to_string();
        }
        format!(
            "AI analysis failed: {}",
            truncate_chars(&self.to_string(), MAX_ERROR_CHARS)
        )
    }
}

pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
