//! Host description passed explicitly to adapters.

use idegen_types::{IdegenError, Platform, Result};
use std::path::{Path, PathBuf};

/// The machine idegen runs on.
///
/// Built once at startup and handed to whatever needs it. Tests construct
/// their own with a temporary home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Operating system family
    pub platform: Platform,
    /// The user's home directory (`USERPROFILE` on Windows)
    pub home: PathBuf,
}

impl HostContext {
    /// Create a context from explicit values.
    pub fn new(platform: Platform, home: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            home: home.into(),
        }
    }

    /// Describe the running process's host.
    pub fn detect() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            IdegenError::Config("Could not determine home directory".to_string())
        })?;
        Ok(Self::new(Platform::current(), home))
    }

    /// Expand a leading `~` against this host's home directory.
    pub fn expand(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match path.strip_prefix("~") {
            Ok(stripped) => self.home.join(stripped),
            Err(_) => path.to_path_buf(),
        }
    }
}
