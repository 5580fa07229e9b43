//! Config file discovery

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "logdigest.json";

/// Resolves where configuration is read from
#[derive(Debug, Clone)]
pub struct Paths {
    /// Per-user config directory, if the platform has one
    pub user_config_dir: Option<PathBuf>,
    pub working_dir: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            user_config_dir: dirs::config_dir().map(|d| d.join("logdigest")),
            working_dir: std::env::current_dir()?,
        })
    }

    /// `./logdigest.json`
    pub fn local_config(&self) -> PathBuf {
        self.working_dir.join(CONFIG_FILE)
    }

    /// `<config_dir>/logdigest/config.json`
    pub fn user_config(&self) -> Option<PathBuf> {
        self.user_config_dir.as_ref().map(|d| d.join("config.json"))
    }

    /// First existing config file: explicit path, local, then per-user
    pub fn resolve_config(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let local = self.local_config();
        if local.is_file() {
            return Some(local);
        }
        self.user_config().filter(|p| p.is_file())
    }
}
