//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level for this output
    #[serde(default)]
    pub level: crate::LogLevel,
    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: crate::LogLevel::Info,
            format: LogFormat::Pretty,
        }
    }
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// WebStorm settings. Unset fields fall back to platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebStormSettings {
    /// Explicit executable, checked before any search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,

    /// Install roots probed in order; the first existing one is searched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_roots: Option<Vec<PathBuf>>,

    /// Regular expression matching versioned install directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_pattern: Option<String>,

    /// Segments between the versioned directory and the executable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_segments: Option<Vec<String>>,

    /// Executable file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_name: Option<String>,

    /// Settings directory name, e.g. `WebStorm9`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_name: Option<String>,

    /// Root of the bundled templates (`project/` and `idea/`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}
