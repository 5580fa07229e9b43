//! Progress events emitted while a log is analyzed

use logdigest_core::LogStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ProgressEvent {
    Preprocessing {
        message: String,
    },
    Preprocessed {
        stats: LogStats,
        message: String,
    },
    Chunking {
        total_chunks: usize,
        message: String,
    },
    Analyzing {
        chunk_index: usize,
        total_chunks: usize,
        message: String,
    },
    ChunkDone {
        chunk_index: usize,
        total_chunks: usize,
        result: String,
    },
    Synthesizing {
        message: String,
    },
    Complete {
        result: String,
        stats: LogStats,
    },
    Error {
        message: String,
    },
}

impl ProgressEvent {
    pub fn stage(&self) -> &'static str {
        match self {
            ProgressEvent::Preprocessing { .. } => "preprocessing",
            ProgressEvent::Preprocessed { .. } => "preprocessed",
            ProgressEvent::Chunking { .. } => "chunking",
            ProgressEvent::Analyzing { .. } => "analyzing",
            ProgressEvent::ChunkDone { .. } => "chunk_done",
            ProgressEvent::Synthesizing { .. } => "synthesizing",
            ProgressEvent::Complete { .. } => "complete",
            ProgressEvent::Error { .. } => "error",
        }
    }

    /// Human-readable one-liner for terminal progress output
    pub fn summary(&self) -> String {
        match self {
            ProgressEvent::Preprocessing { message }
            | ProgressEvent::Preprocessed { message, .. }
            | ProgressEvent::Chunking { message, .. }
            | ProgressEvent::Analyzing { message, .. }
            | ProgressEvent::Synthesizing { message }
            | ProgressEvent::Error { message } => message.clone(),
            ProgressEvent::ChunkDone {
                chunk_index,
                total_chunks,
                ..
            } => format!("Finished chunk {}/{}", chunk_index, total_chunks),
            ProgressEvent::Complete { .. } => "Analysis complete".to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Server-sent-events frame: `data: <json>\n\n`
    pub fn to_sse(&self) -> serde_json::Result<String> {
        Ok(format!("data: {}\n\n", self.to_json()?))
    }
}
