//! Error types for idegen operations.

use thiserror::Error;

/// The main error type for idegen operations.
///
/// "Not found" is deliberately absent: a missing IDE installation or an
/// unmatched path segment is reported as `None` by the locator, never as an
/// error.
#[derive(Error, Debug)]
pub enum IdegenError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed by the caller (bad pattern, empty name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// IDE adapter error (launch failures, missing template sources)
    #[error("IDE error: {0}")]
    Ide(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\nhttps://github.com/idegen/idegen/issues")]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for idegen operations.
pub type Result<T> = std::result::Result<T, IdegenError>;

/// Helper macro to create and return an IdegenError::Bug
///
/// This should be used for conditions that should never occur
/// in normal operation and indicate a bug in idegen itself.
///
/// # Example
///
/// ```ignore
/// if some_impossible_condition {
///     bug!("This should never happen: {:?}", condition);
/// }
/// ```
#[macro_export]
macro_rules! bug {
    ($msg:expr) => {
        return Err($crate::IdegenError::Bug($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::IdegenError::Bug(format!($fmt, $($arg)*)))
    };
}
