//! Common enumerations used throughout idegen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{IdegenError, Result};

/// Log level enumeration for the logging system.
///
/// Deserialization goes through [`FromStr`], so `debug`, `Debug` and `DEBUG`
/// are all accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// The directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl FromStr for LogLevel {
    type Err = IdegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(IdegenError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = IdegenError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// Operating system family, used to pick install roots and settings paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    #[serde(alias = "darwin")]
    MacOs,
    /// Linux and other unix-likes
    Linux,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}

impl FromStr for Platform {
    type Err = IdegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" | "win64" => Ok(Platform::Windows),
            "macos" | "darwin" | "osx" => Ok(Platform::MacOs),
            "linux" | "unix" => Ok(Platform::Linux),
            _ => Err(IdegenError::Validation(format!("Unknown platform: {}", s))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

/// Where directory names without a trailing version number are ranked
/// when several directories match a pattern.
///
/// `First` reproduces the historical ranking in which malformed names win
/// over every versioned name. Changing it changes which installed version
/// is picked by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedVersionPolicy {
    /// Unversioned names rank ahead of every versioned name
    #[default]
    First,
    /// Unversioned names rank behind every versioned name
    Last,
}

impl FromStr for MalformedVersionPolicy {
    type Err = IdegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "first" => Ok(MalformedVersionPolicy::First),
            "last" => Ok(MalformedVersionPolicy::Last),
            _ => Err(IdegenError::Validation(format!(
                "Invalid malformed version policy '{}': expected 'first' or 'last'",
                s
            ))),
        }
    }
}

/// How an existing destination file is handled when copying preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Ask the user for every conflicting file
    #[default]
    Prompt,
    /// Replace conflicting files
    Overwrite,
    /// Keep the existing files
    Skip,
}

impl FromStr for ConflictPolicy {
    type Err = IdegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "prompt" | "ask" => Ok(ConflictPolicy::Prompt),
            "overwrite" | "force" => Ok(ConflictPolicy::Overwrite),
            "skip" | "keep" => Ok(ConflictPolicy::Skip),
            _ => Err(IdegenError::Validation(format!("Invalid conflict policy: {}", s))),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictPolicy::Prompt => write!(f, "prompt"),
            ConflictPolicy::Overwrite => write!(f, "overwrite"),
            ConflictPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// IDEs idegen knows how to generate projects for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeKind {
    /// JetBrains WebStorm
    #[default]
    WebStorm,
}

impl FromStr for IdeKind {
    type Err = IdegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "webstorm" | "wstorm" => Ok(IdeKind::WebStorm),
            _ => Err(IdegenError::Validation(format!("Unsupported IDE: {}", s))),
        }
    }
}

impl fmt::Display for IdeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeKind::WebStorm => write!(f, "webstorm"),
        }
    }
}
