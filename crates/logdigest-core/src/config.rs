//! Configuration for digest assembly and chunking

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest segment size accepted from configuration
const MIN_TARGET_SIZE: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Digest assembly settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Minimum run length collapsed in the info section
    pub run_threshold: usize,
}

impl DigestConfig {
    pub fn new() -> Self {
        Self { run_threshold: 5 }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Chunking settings; sizes are in characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Preferred segment size before overlap is prepended
    pub target_size: usize,

    /// Characters of the previous segment repeated at the start of the next
    pub overlap: usize,

    /// Segment count above which the target size is enlarged
    pub max_segments: usize,

    /// Force the last allowed segment to absorb the remainder
    pub enforce_cap: bool,
}

impl ChunkConfig {
    pub fn new() -> Self {
        Self {
            target_size: 60_000,
            overlap: 500,
            max_segments: 8,
            enforce_cap: true,
        }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub digest: DigestConfig,
    pub chunk: ChunkConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let chunk = &self.chunk;
        if chunk.target_size < MIN_TARGET_SIZE {
            return Err(ConfigError::Invalid(format!(
                "chunk.target_size must be at least {}, got {}",
                MIN_TARGET_SIZE, chunk.target_size
            )));
        }
        if chunk.max_segments == 0 {
            return Err(ConfigError::Invalid(
                "chunk.max_segments must be at least 1".to_string(),
            ));
        }
        if chunk.overlap >= chunk.target_size {
            return Err(ConfigError::Invalid(format!(
                "chunk.overlap ({}) must be smaller than chunk.target_size ({})",
                chunk.overlap, chunk.target_size
            )));
        }
        Ok(())
    }
}
