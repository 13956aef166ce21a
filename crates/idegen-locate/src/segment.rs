//! Path segments: literal names or name patterns.

use idegen_types::{IdegenError, Result};
use regex::Regex;
use std::fmt;
use std::path::{Component, Path};

/// Prefix marking a pattern in [`PathSegment::parse`].
pub const PATTERN_PREFIX: &str = "re:";

/// One step of a versioned lookup.
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// Appended verbatim
    Literal(String),
    /// Replaced by the best-ranked matching subdirectory
    Pattern(Regex),
}

impl PathSegment {
    /// A literal path component.
    pub fn literal(name: impl Into<String>) -> Self {
        PathSegment::Literal(name.into())
    }

    /// A pattern segment from a regular expression.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `pattern` is not a valid regular expression.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(PathSegment::Pattern)
            .map_err(|e| IdegenError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e)))
    }

    /// Parse the textual form used on the command line and in config:
    /// `re:<regex>` is a pattern, anything else a literal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an invalid pattern or for a literal
    /// that is absolute or starts at a root (`/etc`, `C:\`).
    pub fn parse(text: &str) -> Result<Self> {
        match text.strip_prefix(PATTERN_PREFIX) {
            Some(pattern) => Self::pattern(pattern),
            None if is_rooted(text) => Err(IdegenError::InvalidArgument(format!(
                "Path segment '{}' must be relative",
                text
            ))),
            None => Ok(Self::literal(text)),
        }
    }

    /// Whether this is a pattern segment.
    pub fn is_pattern(&self) -> bool {
        matches!(self, PathSegment::Pattern(_))
    }
}

fn is_rooted(text: &str) -> bool {
    Path::new(text)
        .components()
        .next()
        .is_some_and(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::literal(name)
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Literal(name)
    }
}

impl From<Regex> for PathSegment {
    fn from(pattern: Regex) -> Self {
        PathSegment::Pattern(pattern)
    }
}

impl PartialEq for PathSegment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PathSegment::Literal(a), PathSegment::Literal(b)) => a == b,
            (PathSegment::Pattern(a), PathSegment::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Literal(name) => write!(f, "{}", name),
            PathSegment::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(PathSegment::parse("bin").unwrap(), PathSegment::literal("bin"));
        assert!(PathSegment::parse(r"re:^WebStorm\s*[.\d]+$").unwrap().is_pattern());
        assert_eq!(PathSegment::parse("re:^a$").unwrap().to_string(), "/^a$/");
    }

    #[test]
    fn test_parse_rejects_rooted_literals() {
        assert!(matches!(PathSegment::parse("/etc"), Err(IdegenError::InvalidArgument(_))));
        assert!(matches!(PathSegment::parse("/"), Err(IdegenError::InvalidArgument(_))));
        assert_eq!(PathSegment::parse("Contents/MacOS").unwrap(), PathSegment::literal("Contents/MacOS"));
    }

    #[test]
    fn test_invalid_pattern_is_invalid_argument() {
        let result = PathSegment::parse("re:WebStorm[");
        assert!(matches!(result, Err(IdegenError::InvalidArgument(_))));
    }
}
