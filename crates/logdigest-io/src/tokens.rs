//! Token estimation for segment reporting

/// Estimate BPE token count of log text
///
/// Heuristic by content mix:
/// - Symbol/number-dense lines (addresses, timestamps, paths): ~2.5 chars/token
/// - Prose-like lines: ~4.0 chars/token
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let total_chars = text.chars().count();
    let dense_chars = text
        .chars()
        .filter(|c| c.is_ascii_digit() || "[]{}()<>:=/\\._-|@#$%&*".contains(*c))
        .count();

    let dense_fraction = ((dense_chars as f64 / total_chars as f64) * 2.0).min(1.0);
    let chars_per_token = dense_fraction * 2.5 + (1.0 - dense_fraction) * 4.0;

    (total_chars as f64 / chars_per_token).max(1.0) as usize
}
