use crate::cli::{ChunkArgs, EventFormat};
use logdigest_analyze::{Analyzer, ProgressEvent};
use std::path::Path;

fn print_event(event: &ProgressEvent, format: EventFormat) {
    let line = match format {
        EventFormat::Text => match event {
            ProgressEvent::ChunkDone {
                chunk_index,
                total_chunks,
                result,
            } => format!("[{}/{}]\n{}\n", chunk_index, total_chunks, result.trim_end()),
            ProgressEvent::Complete { result, .. } => format!("\n{}\n", result.trim_end()),
            other => format!("[{}] {}", other.stage(), other.summary()),
        },
        EventFormat::Jsonl => match event.to_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "could not encode progress event");
                return;
            }
        },
        EventFormat::Sse => match event.to_sse() {
            Ok(frame) => {
                print!("{}", frame);
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not encode progress event");
                return;
            }
        },
    };
    println!("{}", line);
}

pub fn run(
    file: &str,
    config_path: Option<&Path>,
    offline: bool,
    format: EventFormat,
    output: Option<&Path>,
    sizing: &ChunkArgs,
) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    super::apply_chunk_args(&mut config, sizing)?;

    let raw = super::read_input(file)?;
    let analyzer = Analyzer::new(super::build_summarizer(offline)?, config);

    let report = super::runtime()?.block_on(analyzer.run(&raw, |event| print_event(&event, format)))?;

    if let Some(path) = output {
        logdigest_io::atomic_write(path, report.to_markdown().as_bytes())?;
        eprintln!("Wrote report to {}", path.display());
    }
    Ok(())
}
