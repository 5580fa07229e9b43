use std::path::Path;

pub fn run(
    file: &str,
    config_path: Option<&Path>,
    json: bool,
    output: Option<&Path>,
    run_threshold: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(threshold) = run_threshold {
        config.digest.run_threshold = threshold;
    }

    let raw = super::read_input(file)?;
    let processed = logdigest_core::assemble_with(&raw, &config.digest);
    tracing::info!(
        lines = processed.original_line_count,
        chars = processed.processed_text.len(),
        "digest assembled"
    );

    let rendered = if json {
        serde_json::to_string_pretty(&processed)?
    } else {
        processed.processed_text
    };

    match output {
        Some(path) => {
            logdigest_io::atomic_write(path, rendered.as_bytes())?;
            eprintln!("Wrote digest to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
