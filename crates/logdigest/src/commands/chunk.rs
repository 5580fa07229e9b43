use crate::cli::ChunkArgs;
use logdigest_core::{assemble_with, segments};
use logdigest_io::estimate_tokens;
use std::path::Path;

pub fn run(
    file: &str,
    config_path: Option<&Path>,
    sizing: &ChunkArgs,
    print: bool,
) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    super::apply_chunk_args(&mut config, sizing)?;

    let raw = super::read_input(file)?;
    let processed = assemble_with(&raw, &config.digest);
    let segs = segments(&processed.processed_text, &config.chunk);

    println!(
        "Digest: {} lines -> {} chars in {} segments (target {}, overlap {}, max {})",
        processed.original_line_count,
        processed.processed_text.chars().count(),
        segs.len(),
        config.chunk.target_size,
        config.chunk.overlap,
        config.chunk.max_segments,
    );
    for seg in &segs {
        println!(
            "  [{}/{}] {} chars, ~{} tokens",
            seg.index,
            seg.total,
            seg.text.chars().count(),
            estimate_tokens(&seg.text)
        );
        if print {
            println!("{}", seg.text);
        }
    }
    Ok(())
}
