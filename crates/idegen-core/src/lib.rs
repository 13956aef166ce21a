//! # idegen Core
//!
//! Core utilities, configuration management, logging, and common functionality
//! for the idegen IDE project generator.
//!
//! This crate provides:
//!
//! - **Configuration**: Layered configuration (defaults, file, programmatic, environment)
//! - **Logging**: `tracing` subscriber setup with pretty, compact, and JSON output
//! - **Terminal**: Colored output, terminal detection, formatting
//! - **Host Context**: Platform and home directory, passed explicitly instead of global state
//! - **File Operations**: Path normalization, recursive and conflict-aware copy
//! - **Process Execution**: Command execution and detached launches
//!
//! ## Example
//!
//! ```no_run
//! use idegen_core::{config::IdegenConfig, host::HostContext, log};
//!
//! # fn main() -> idegen_core::Result<()> {
//! // Load configuration
//! let config = IdegenConfig::load()?;
//!
//! // Initialize logging
//! log::init_from_config(&config.log)?;
//!
//! // Describe the machine we're running on
//! let host = HostContext::detect()?;
//! println!("{} {:?}", host.platform, host.home);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod host;
pub mod log;
pub mod term;
pub mod util;

// Re-export commonly used items
pub use config::{Config, IdegenConfig};
pub use host::HostContext;
pub use idegen_types::{IdegenError, Result};

/// idegen application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// idegen application name
pub const APP_NAME: &str = "idegen";
