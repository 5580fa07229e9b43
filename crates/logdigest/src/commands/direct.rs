use logdigest_analyze::Analyzer;
use std::path::Path;

pub fn run(file: &str, config_path: Option<&Path>, offline: bool) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let raw = super::read_input(file)?;
    let analyzer = Analyzer::new(super::build_summarizer(offline)?, config);

    let analysis = super::runtime()?.block_on(analyzer.analyze_direct(&raw))?;
    println!("{}", analysis.trim_end());
    Ok(())
}
