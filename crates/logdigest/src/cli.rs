use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logdigest")]
#[command(version)]
#[command(about = "Condense large log files into bounded digests for LLM analysis")]
pub struct Cli {
    /// Config file (defaults to ./logdigest.json, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify, compress and print the digest of a log
    Digest {
        /// Log file, or `-` for stdin
        file: String,

        /// Print the full ProcessedLog as JSON
        #[arg(long)]
        json: bool,

        /// Write the digest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum run of similar info lines to collapse
        #[arg(long)]
        run_threshold: Option<usize>,
    },

    /// Show how a log's digest splits into segments
    Chunk {
        /// Log file, or `-` for stdin
        file: String,

        #[command(flatten)]
        sizing: ChunkArgs,

        /// Print each segment's text
        #[arg(long)]
        print: bool,
    },

    /// Run the staged analysis: digest, per-chunk analysis, synthesis
    Analyze {
        /// Log file, or `-` for stdin
        file: String,

        /// Use the extractive summarizer instead of the Gemini API
        #[arg(long)]
        offline: bool,

        /// How progress events are printed
        #[arg(long, value_enum, default_value_t = EventFormat::Text)]
        format: EventFormat,

        /// Write the final report (markdown) here
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        sizing: ChunkArgs,
    },

    /// Single-shot analysis of the raw log without preprocessing
    Direct {
        /// Log file, or `-` for stdin
        file: String,

        /// Use the extractive summarizer instead of the Gemini API
        #[arg(long)]
        offline: bool,
    },

    /// Show configuration and API key status
    Status,

    /// Print version information
    Version,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct ChunkArgs {
    /// Preferred segment size in characters
    #[arg(long)]
    pub target_size: Option<usize>,

    /// Characters repeated between consecutive segments
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Maximum number of segments
    #[arg(long)]
    pub max_segments: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventFormat {
    /// One human-readable line per stage
    Text,
    /// One JSON object per line
    Jsonl,
    /// Server-sent-events frames (`data: {...}`)
    Sse,
}
