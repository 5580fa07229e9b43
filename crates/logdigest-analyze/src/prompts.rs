//! Prompt templates sent to the summarizer

use logdigest_core::LogStats;

/// Opens the block of log-derived text inside a prompt
pub const CONTENT_START: &str = "<<<BEGIN LOG CONTENT>>>";
/// Closes the block opened by [`CONTENT_START`]
pub const CONTENT_END: &str = "<<<END LOG CONTENT>>>";

/// Separator between per-chunk analyses in the synthesis prompt
pub const ANALYSIS_SEPARATOR: &str = "\n\n---\n\n";

fn fenced(content: &str) -> String {
    format!("{}\n{}\n{}", CONTENT_START, content.trim_end(), CONTENT_END)
}

/// Prompt for one segment of a preprocessed digest
pub fn chunk_prompt(chunk_index: usize, total_chunks: usize, chunk_text: &str) -> String {
    format!(
        "You are a senior site reliability engineer reviewing part {index} of {total} \
         of a preprocessed log digest. High-severity lines appear in full; repeated \
         informational lines were collapsed into omission markers.\n\n\
         For this part:\n\
         1. List the distinct failures and their first occurrence.\n\
         2. Note repeated or escalating patterns.\n\
         3. Point out anything that looks like a root cause rather than a symptom.\n\
         Keep it under 300 words.\n\n{content}",
        index = chunk_index,
        total = total_chunks,
        content = fenced(chunk_text),
    )
}

/// Combine per-chunk results for the synthesis prompt
pub fn combine_analyses(analyses: &[String]) -> String {
    analyses
        .iter()
        .enumerate()
        .map(|(i, analysis)| format!("### Chunk {} Analysis\n{}", i + 1, analysis))
        .collect::<Vec<_>>()
        .join(ANALYSIS_SEPARATOR)
}

/// Prompt that merges per-chunk analyses into one report
pub fn synthesis_prompt(
    total_lines: usize,
    total_chunks: usize,
    chunk_analyses: &str,
    stats: &LogStats,
) -> String {
    let stats_json = serde_json::to_string_pretty(stats).unwrap_or_default();
    format!(
        "You are a senior site reliability engineer. A log file of {lines} lines was \
         split into {chunks} parts and each part was analyzed separately. Line counts \
         by severity:\n{stats}\n\n\
         Write one report with these sections:\n\
         ## Summary\n## Root Cause\n## Recommended Next Steps\n## Notable Patterns\n\n\
         Merge duplicate findings across parts. Per-part analyses:\n\n{content}",
        lines = total_lines,
        chunks = total_chunks,
        stats = stats_json,
        content = fenced(chunk_analyses),
    )
}

/// Single-shot prompt over raw log text, no preprocessing
pub fn direct_prompt(log_data: &str) -> String {
    format!(
        "You are a senior site reliability engineer.\n\n\
         Analyze the following application logs.\n\n\
         1. Identify the main errors or failures.\n\
         2. Explain the likely root cause in simple terms.\n\
         3. Suggest practical next steps to fix or investigate.\n\
         4. Mention any suspicious patterns or repeated issues.\n\n\
         Respond in clear paragraphs. Avoid jargon where possible.\n\n{}",
        fenced(log_data)
    )
}

/// Text between the content fences, or the whole prompt if unfenced
pub fn extract_content(prompt: &str) -> &str {
    let Some(start) = prompt.find(CONTENT_START) else {
        return prompt;
    };
    let body = &prompt[start + CONTENT_START.len()..];
    match body.rfind(CONTENT_END) {
        Some(end) => &body[..end],
        None => body,
    }
}
