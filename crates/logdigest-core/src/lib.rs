//! Log preprocessing and chunking engine

mod chunk;
mod classify;
mod config;
mod digest;
mod runs;
mod types;

pub use chunk::{chunk, segments, Segment};
pub use classify::{classify, ClassifiedBuckets};
pub use config::{ChunkConfig, Config, ConfigError, DigestConfig};
pub use digest::{assemble, assemble_with, split_lines, ProcessedLog, SECTION_MARKER};
pub use runs::{compress, compress_lines, normalize, CompressedRun, RunItem};
pub use types::{LogStats, Severity};
