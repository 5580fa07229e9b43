pub fn run() -> anyhow::Result<()> {
    println!("logdigest {}", env!("CARGO_PKG_VERSION"));
    println!("Log preprocessing and chunking for LLM-assisted analysis");
    Ok(())
}
