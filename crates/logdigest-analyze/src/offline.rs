//! Extractive summarizer that needs no network

use crate::error::AnalyzeError;
use crate::prompts::extract_content;
use crate::summarizer::Summarizer;
use async_trait::async_trait;
use logdigest_core::{classify, Severity, SECTION_MARKER};
use std::collections::HashSet;

const HEADER_PREFIX: &str = "Offline summary:";

/// Lists the distinct high-severity lines found in the prompt content
#[derive(Debug, Clone)]
pub struct OfflineSummarizer {
    max_lines: usize,
}

impl OfflineSummarizer {
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }
}

impl Default for OfflineSummarizer {
    fn default() -> Self {
        Self::new(20)
    }
}

fn is_scaffolding(line: &str) -> bool {
    line.is_empty()
        || line.starts_with(SECTION_MARKER)
        || line.starts_with("Stats:")
        || line.starts_with("### Chunk")
        || line.starts_with(HEADER_PREFIX)
        || line == "---"
}

/// Drop a `- [severity] ` bullet left by an earlier offline pass
fn strip_bullet(line: &str) -> &str {
    let Some(rest) = line.strip_prefix("- [") else {
        return line;
    };
    match rest.split_once("] ") {
        Some((tag, body)) if Severity::ALL.iter().any(|s| s.as_str() == tag) => body,
        _ => line,
    }
}

/// Pick up to `max_lines` distinct non-info lines, in order of appearance
pub fn extract_notable(content: &str, max_lines: usize) -> Vec<(Severity, String)> {
    let mut seen = HashSet::new();
    let mut notable = Vec::new();
    for raw in content.lines() {
        let line = raw.trim();
        if is_scaffolding(line) {
            continue;
        }
        let line = strip_bullet(line);
        let severity = classify(line);
        if severity == Severity::Info || !seen.insert(line.to_string()) {
            continue;
        }
        notable.push((severity, line.to_string()));
        if notable.len() >= max_lines {
            break;
        }
    }
    notable
}

#[async_trait]
impl Summarizer for OfflineSummarizer {
    fn name(&self) -> &str {
        "offline"
    }

    async fn summarize(&self, prompt: &str) -> Result<String, AnalyzeError> {
        let notable = extract_notable(extract_content(prompt), self.max_lines);
        if notable.is_empty() {
            return Ok(format!("{} no high-severity lines found.", HEADER_PREFIX));
        }

        let count = |sev: Severity| notable.iter().filter(|(s, _)| *s == sev).count();
        let mut out = format!(
            "{} {} notable lines ({} critical, {} error, {} warning)",
            HEADER_PREFIX,
            notable.len(),
            count(Severity::Critical),
            count(Severity::Error),
            count(Severity::Warning),
        );
        for (severity, line) in &notable {
            out.push_str(&format!("\n- [{}] {}", severity, line));
        }
        Ok(out)
    }
}
