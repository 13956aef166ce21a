//! # idegen Types
//!
//! Core types, traits, and enums shared across all idegen crates.
//!
//! This crate provides the fundamental building blocks for the idegen
//! IDE project generator, including:
//!
//! - A validated project name used in generated file names
//! - Common enums for platforms, log levels, and copy conflict handling
//! - The `IdeAdapter` trait each supported IDE implements
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use idegen_types::{Platform, ProjectName};
//!
//! let name = ProjectName::new("my-app").unwrap();
//! assert_eq!(name.as_str(), "my-app");
//!
//! // Names end up in file names, so separators are rejected
//! assert!(ProjectName::new("a/b").is_err());
//!
//! let platform: Platform = "windows".parse().unwrap();
//! assert_eq!(platform, Platform::Windows);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{IdegenError, Result};
pub use identifiers::ProjectName;
pub use enums::{ConflictPolicy, IdeKind, LogLevel, MalformedVersionPolicy, Platform};
pub use traits::{ConflictAction, IdeAdapter, PreferenceSet};
