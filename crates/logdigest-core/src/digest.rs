//! Digest assembly: classify, count, render

use crate::classify::ClassifiedBuckets;
use crate::config::DigestConfig;
use crate::runs::compress_lines;
use crate::types::{LogStats, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix of every section header in the rendered digest
pub const SECTION_MARKER: &str = "===";

/// Preprocessed log ready for chunking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedLog {
    pub original_line_count: usize,
    pub processed_text: String,
    pub categories: BTreeMap<Severity, usize>,
    pub summary_stats: LogStats,
}

/// Split raw text into lines, dropping trailing blank lines
pub fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Assemble a digest with default settings
pub fn assemble(raw: &str) -> ProcessedLog {
    assemble_with(raw, &DigestConfig::default())
}

pub fn assemble_with(raw: &str, config: &DigestConfig) -> ProcessedLog {
    let lines = split_lines(raw);
    let buckets = ClassifiedBuckets::from_lines(lines.iter().copied());

    let stats = LogStats {
        total: lines.len(),
        critical: buckets.count(Severity::Critical),
        errors: buckets.count(Severity::Error),
        warnings: buckets.count(Severity::Warning),
        info: buckets.count(Severity::Info),
    };
    debug_assert_eq!(buckets.total(), stats.total);

    let mut out = String::new();
    out.push_str(&format!(
        "{} LOG DIGEST ({} lines) {}\n",
        SECTION_MARKER, stats.total, SECTION_MARKER
    ));
    out.push_str(&format!(
        "Stats: {} total | {} critical | {} errors | {} warnings | {} info\n",
        stats.total, stats.critical, stats.errors, stats.warnings, stats.info
    ));

    for severity in Severity::DETAILED {
        let bucket = buckets.get(severity);
        if bucket.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{} {} ({} lines) {}\n",
            SECTION_MARKER,
            severity.label(),
            bucket.len(),
            SECTION_MARKER
        ));
        for line in bucket {
            out.push_str(line);
            out.push('\n');
        }
    }

    let info = buckets.get(Severity::Info);
    if !info.is_empty() {
        let compressed = compress_lines(info, config.run_threshold);
        out.push_str(&format!(
            "\n{} {} ({} lines, compressed from {} to {}) {}\n",
            SECTION_MARKER,
            Severity::Info.label(),
            info.len(),
            info.len(),
            compressed.len(),
            SECTION_MARKER
        ));
        for line in &compressed {
            out.push_str(line);
            out.push('\n');
        }
    }

    tracing::debug!(
        total = stats.total,
        high_severity = stats.high_severity(),
        processed_chars = out.len(),
        "assembled digest"
    );

    ProcessedLog {
        original_line_count: stats.total,
        processed_text: out,
        categories: buckets.counts(),
        summary_stats: stats,
    }
}
