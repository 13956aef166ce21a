//! # idegen WebStorm
//!
//! JetBrains WebStorm support:
//! - Template context with WebStorm's defaults
//! - `.idea` project generation from the bundled templates
//! - External tools and file templates installed into the user's settings
//! - Executable discovery across versioned install directories
//! - Opening a project in the IDE

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod context;
pub mod install;

pub use adapter::WebStorm;
pub use context::{ContentPath, WebStormContext};
pub use install::InstallLayout;

use std::path::PathBuf;

/// Templates shipped with this crate.
pub fn bundled_template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("template")
}
