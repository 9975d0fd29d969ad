use std::path::PathBuf;

use super::Config;

/// Shared per-process state handed to every request task.
///
/// Nothing in here mutates after startup, so request tasks share it
/// through a plain `Arc` with no interior locking.
pub struct ServerContext {
    pub config: Config,
    /// Working directory request paths are joined onto.
    pub root: PathBuf,
    /// Absolute location of the fallback entry document.
    pub entry_path: PathBuf,
}

impl ServerContext {
    pub fn new(config: Config) -> std::io::Result<Self> {
        Ok(Self::with_root(config, std::env::current_dir()?))
    }

    pub fn with_root(config: Config, root: PathBuf) -> Self {
        let entry_path = root.join(&config.entry_point);
        Self {
            config,
            root,
            entry_path,
        }
    }
}
