//! Open a project in the IDE.

use anyhow::Result;
use colored::Colorize;
use idegen_core::config::IdegenConfig;
use idegen_types::IdeAdapter;
use std::path::Path;

pub async fn execute(config: &IdegenConfig, location: &Path) -> Result<()> {
    let adapter = super::webstorm(config)?;
    adapter.open(location)?;

    println!("{} {}", "Opening".green().bold(), location.display().to_string().cyan());
    println!("  WebStorm may take a while to finish indexing.");
    Ok(())
}
