use logdigest_analyze::gemini::{api_key_configured, MODEL_ENV};
use logdigest_io::Paths;
use std::path::Path;

pub fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let source = paths.resolve_config(config_path);
    let config = super::load_config(config_path)?;

    let output = serde_json::json!({
        "status": "healthy",
        "config_file": source.map(|p| p.display().to_string()),
        "google_api_key_configured": api_key_configured(),
        "model": std::env::var(MODEL_ENV).ok(),
        "config": config,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
