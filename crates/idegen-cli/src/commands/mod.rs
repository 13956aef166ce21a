//! CLI command implementations.

pub mod locate;
pub mod new;
pub mod open;
pub mod prefs;
pub mod resolve;
pub mod scan;
pub mod version;

use anyhow::{Context, Result};
use idegen_core::config::IdegenConfig;
use idegen_core::HostContext;
use idegen_webstorm::WebStorm;

/// The WebStorm adapter for this machine and configuration.
pub(crate) fn webstorm(config: &IdegenConfig) -> Result<WebStorm> {
    let host = HostContext::detect()?;
    WebStorm::new(host, config.webstorm.clone(), config.malformed_versions)
        .context("Invalid webstorm configuration")
}
