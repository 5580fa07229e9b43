//! Boundary-aware splitting of a digest into bounded segments

use crate::config::ChunkConfig;
use crate::digest::SECTION_MARKER;
use serde::{Deserialize, Serialize};

/// Growth added to the per-segment size when the count cap kicks in
const CAP_SLACK: usize = 1000;

/// One slice of the digest handed to a summarizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based position
    pub index: usize,
    pub total: usize,
    pub text: String,
}

/// Split `text` into overlapping segments of roughly `target_size` characters
pub fn chunk(text: &str, config: &ChunkConfig) -> Vec<String> {
    split(text, config).into_iter().map(str::to_string).collect()
}

/// Like [`chunk`], tagging each segment with its index and the total count
pub fn segments(text: &str, config: &ChunkConfig) -> Vec<Segment> {
    let parts = split(text, config);
    let total = parts.len();
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| Segment {
            index: i + 1,
            total,
            text: part.to_string(),
        })
        .collect()
}

fn effective_target(char_len: usize, config: &ChunkConfig) -> usize {
    let target = config.target_size.max(1);
    let max_segments = config.max_segments.max(1);
    let estimated = char_len.div_ceil(target);
    if estimated > max_segments {
        char_len / max_segments + CAP_SLACK
    } else {
        target
    }
}

fn split<'a>(text: &'a str, config: &ChunkConfig) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }

    let char_len = text.chars().count();
    let target = effective_target(char_len, config);
    let max_segments = config.max_segments.max(1);
    if target != config.target_size {
        tracing::debug!(
            char_len,
            requested = config.target_size,
            target,
            "enlarged segment size to respect segment cap"
        );
    }

    let mut parts: Vec<&'a str> = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let rest = &text[start..];
        let takes_remainder = config.enforce_cap && parts.len() + 1 >= max_segments;
        let end = if takes_remainder {
            text.len()
        } else {
            match rest.char_indices().nth(target) {
                Some((window_end, _)) => start + find_break(&rest[..window_end]),
                None => text.len(),
            }
        };

        let seg_start = if parts.is_empty() {
            start
        } else {
            chars_back(text, start, config.overlap)
        };
        parts.push(&text[seg_start..end]);
        start = end;
    }
    parts
}

/// Byte offset inside `window` to break after. Always > 0.
///
/// Preference: before a section header line, after a blank line, after any
/// newline, after a space, then a hard split at the window end.
fn find_break(window: &str) -> usize {
    let section = format!("\n{}", SECTION_MARKER);

    if let Some(pos) = window.rfind(&section).filter(|&pos| pos > 0) {
        return pos + 1;
    }
    if let Some(pos) = window.rfind("\n\n").filter(|&pos| pos > 0) {
        return pos + 2;
    }
    if let Some(pos) = window.rfind('\n') {
        return pos + 1;
    }
    if let Some(pos) = window.rfind(' ') {
        return pos + 1;
    }
    window.len()
}

/// Byte offset `n` characters before `end`, clamped to 0
fn chars_back(text: &str, end: usize, n: usize) -> usize {
    if n == 0 {
        return end;
    }
    text[..end]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}
