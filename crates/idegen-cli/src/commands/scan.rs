//! List directories containing a file.

use anyhow::{Context, Result};
use colored::Colorize;
use idegen_locate::subdirectories_with_file;
use std::path::Path;

pub async fn execute(base: &Path, file_name: &str) -> Result<()> {
    let (base_dir, name) = (base.to_path_buf(), file_name.to_string());
    let found = tokio::task::spawn_blocking(move || subdirectories_with_file(base_dir, &name))
        .await
        .context("Scan task failed")?;

    if found.is_empty() {
        eprintln!("{} No directory below {} contains {}", "!".yellow(), base.display(), file_name);
    }
    for directory in found {
        println!("{}", directory.display());
    }

    Ok(())
}
