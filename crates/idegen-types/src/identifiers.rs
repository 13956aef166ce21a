//! Type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{IdegenError, Result};

/// A validated IDE project name.
///
/// The name is substituted into generated file names (for example the
/// `<name>.iml` module file), so it must:
/// - Be non-empty after trimming
/// - Contain no path separators (`/` or `\`)
/// - Contain no characters Windows rejects in file names (`<>:"|?*`)
/// - Not be `.` or `..`
///
/// # Example
///
/// ```
/// use idegen_types::ProjectName;
///
/// let name = ProjectName::new("My Project").unwrap();
/// assert_eq!(name.as_str(), "My Project");
///
/// assert!(ProjectName::new("").is_err());
/// assert!(ProjectName::new("..").is_err());
/// assert!(ProjectName::new("a\\b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name can't be used as a file name.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if !Self::is_valid(name) {
            return Err(IdegenError::InvalidArgument(format!(
                "Invalid project name '{}': must be a non-empty file name without \
                path separators or any of <>:\"|?*",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Check if a name is valid without allocating.
    pub fn is_valid(name: &str) -> bool {
        if name.is_empty() || name == "." || name == ".." {
            return false;
        }

        !name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*') || c.is_control())
    }

    /// Derive a project name from the last component of a directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no usable final component.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();

        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| IdegenError::InvalidArgument(
                format!("Cannot derive a project name from path: {:?}", path)
            ))?;

        Self::new(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self("NewProject".to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectName {
    type Err = IdegenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = IdegenError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}
