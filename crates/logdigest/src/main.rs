mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries digests and events
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Digest {
            file,
            json,
            output,
            run_threshold,
        } => commands::digest::run(
            &file,
            config_path,
            json,
            output.as_deref(),
            run_threshold,
        ),
        Commands::Chunk {
            file,
            sizing,
            print,
        } => commands::chunk::run(&file, config_path, &sizing, print),
        Commands::Analyze {
            file,
            offline,
            format,
            output,
            sizing,
        } => commands::analyze::run(
            &file,
            config_path,
            offline,
            format,
            output.as_deref(),
            &sizing,
        ),
        Commands::Direct { file, offline } => commands::direct::run(&file, config_path, offline),
        Commands::Status => commands::status::run(config_path),
        Commands::Version => commands::version::run(),
    }
}
