//! Reading raw log files into text

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("unsupported file type for {path}; expected one of: {allowed}")]
    UnsupportedExtension { path: String, allowed: String },
    #[error("log file is empty: {0}")]
    Empty(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Which files are accepted for analysis
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    /// Lowercase extensions without the dot
    pub allowed_extensions: Vec<String>,
}

impl IntakePolicy {
    pub fn new() -> Self {
        Self {
            allowed_extensions: vec!["txt".to_string(), "log".to_string()],
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .is_some_and(|e| self.allowed_extensions.iter().any(|a| *a == e))
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Read a log file, rejecting unsupported names and blank content
pub fn load_log(path: &Path, policy: &IntakePolicy) -> Result<String, IntakeError> {
    let shown = path.display().to_string();
    if !policy.accepts(path) {
        return Err(IntakeError::UnsupportedExtension {
            path: shown,
            allowed: policy
                .allowed_extensions
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| IntakeError::Read {
        path: shown.clone(),
        source,
    })?;
    let text = decode_lossy(&bytes);
    if text.trim().is_empty() {
        return Err(IntakeError::Empty(shown));
    }

    tracing::debug!(path = %shown, bytes = bytes.len(), "loaded log");
    Ok(text)
}
