//! Resolve a versioned path.

use anyhow::{bail, Context, Result};
use idegen_core::config::IdegenConfig;
use idegen_locate::{PathSegment, VersionedPathResolver};
use std::path::Path;

pub async fn execute(config: &IdegenConfig, base: &Path, segments: &[String]) -> Result<()> {
    let segments = segments
        .iter()
        .map(|s| PathSegment::parse(s))
        .collect::<idegen_types::Result<Vec<_>>>()
        .context("Invalid path segment")?;

    let resolver = VersionedPathResolver::with_policy(config.malformed_versions);
    match resolver.versioned_path_blocking_task(base.to_path_buf(), segments.clone()).await? {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => {
            let wanted: Vec<String> = segments.iter().map(ToString::to_string).collect();
            bail!("not found: {} below {}", wanted.join("/"), base.display())
        }
    }
}
