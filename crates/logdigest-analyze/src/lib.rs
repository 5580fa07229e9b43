//! Staged log analysis over a pluggable summarizer

mod error;
mod events;
pub mod gemini;
mod offline;
mod pipeline;
pub mod prompts;
mod summarizer;

pub use error::{AnalyzeError, RATE_LIMIT_MESSAGE};
pub use events::ProgressEvent;
pub use gemini::{GeminiConfig, GeminiSummarizer};
pub use offline::OfflineSummarizer;
pub use pipeline::{AnalysisReport, Analyzer};
pub use summarizer::Summarizer;
