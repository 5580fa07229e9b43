//! Log intake, output writing and path resolution

mod intake;
mod io;
mod paths;
mod tokens;

pub use intake::{decode_lossy, load_log, IntakeError, IntakePolicy};
pub use io::atomic_write;
pub use paths::Paths;
pub use tokens::estimate_tokens;
