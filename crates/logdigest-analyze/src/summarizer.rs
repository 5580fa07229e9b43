use crate::error::AnalyzeError;
use async_trait::async_trait;

/// External text generator that turns a prompt into an analysis
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Identifier recorded in reports
    fn name(&self) -> &str;

    async fn summarize(&self, prompt: &str) -> Result<String, AnalyzeError>;
}

#[async_trait]
impl Summarizer for Box<dyn Summarizer> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn summarize(&self, prompt: &str) -> Result<String, AnalyzeError> {
        (**self).summarize(prompt).await
    }
}
