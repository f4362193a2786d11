//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Environment variable naming the storage directory.
pub const STORAGE_DIR_ENV: &str = "INSTALL_ID_DIR";

/// Application directory name under the per-user data directory.
pub const APP_DIR_NAME: &str = "install-id";

/// Storage directory used when [`STORAGE_DIR_ENV`] is unset:
/// `<local data dir>/install-id`, e.g. `~/.local/share/install-id` on Linux.
///
/// Always absolute, so every process of one installation resolves the same
/// record regardless of its working directory. Falls back to the system temp
/// directory when the platform reports no data directory.
#[must_use]
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(std::env::temp_dir).join(APP_DIR_NAME)
}

/// Where the installation record is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Private storage directory of the host application.
    pub storage_dir: PathBuf,
}

impl Config {
    /// Creates a config with an explicit storage directory.
    #[must_use]
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self { storage_dir: storage_dir.into() }
    }

    /// Reads the config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values
    /// count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage_dir = lookup(STORAGE_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_storage_dir, PathBuf::from);
        Self { storage_dir }
    }
}
