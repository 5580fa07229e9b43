pub mod analyze;
pub mod chunk;
pub mod digest;
pub mod direct;
pub mod status;
pub mod version;

use crate::cli::ChunkArgs;
use anyhow::Context;
use logdigest_analyze::{GeminiConfig, GeminiSummarizer, OfflineSummarizer, Summarizer};
use logdigest_core::Config;
use logdigest_io::{decode_lossy, load_log, IntakePolicy, Paths};
use std::io::Read;
use std::path::Path;

/// Load config from the resolved file, or defaults when none exists
pub(crate) fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let paths = Paths::new()?;
    match paths.resolve_config(explicit) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(Config::load(&path)?)
        }
        None => Ok(Config::default()),
    }
}

/// Read a log from a path, or stdin for `-`
pub(crate) fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read stdin")?;
        let text = decode_lossy(&bytes);
        anyhow::ensure!(!text.trim().is_empty(), "log input on stdin is empty");
        return Ok(text);
    }
    Ok(load_log(Path::new(file), &IntakePolicy::default())?)
}

pub(crate) fn apply_chunk_args(config: &mut Config, args: &ChunkArgs) -> anyhow::Result<()> {
    if let Some(target_size) = args.target_size {
        config.chunk.target_size = target_size;
    }
    if let Some(overlap) = args.overlap {
        config.chunk.overlap = overlap;
    }
    if let Some(max_segments) = args.max_segments {
        config.chunk.max_segments = max_segments;
    }
    config.validate()?;
    Ok(())
}

pub(crate) fn build_summarizer(offline: bool) -> anyhow::Result<Box<dyn Summarizer>> {
    if offline {
        return Ok(Box::new(OfflineSummarizer::default()));
    }
    let config = GeminiConfig::from_env()
        .context("set GOOGLE_API_KEY or pass --offline for extractive summaries")?;
    Ok(Box::new(GeminiSummarizer::new(config)))
}

pub(crate) fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
