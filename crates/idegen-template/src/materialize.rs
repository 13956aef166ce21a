//! Writing rendered templates to disk.

use crate::engine::TemplateEngine;
use idegen_core::util::fs::{ensure_dir, file_exists};
use idegen_types::{IdegenError, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for [`render_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Overwrite destination files that already exist
    pub force: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { force: true }
    }
}

/// Files touched by [`render_dir`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Files written
    pub written: Vec<PathBuf>,
    /// Existing files left alone because `force` was off
    pub skipped: Vec<PathBuf>,
}

/// Render the template at `source` and write it to `destination`.
///
/// Tokens in the destination's file name are rendered too, so
/// `{{projectName}}.iml` becomes `shop.iml`. Files that are not valid
/// UTF-8 are copied unchanged. Returns the path actually written.
pub fn render_file(
    engine: &TemplateEngine,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    context: &impl Serialize,
) -> Result<PathBuf> {
    let source = source.as_ref();
    let destination = render_name(engine, destination.as_ref(), context)?;

    let bytes = fs::read(source)?;
    match String::from_utf8(bytes) {
        Ok(text) => {
            let rendered = engine.render(&text, context).map_err(|e| {
                IdegenError::Template(format!("{:?} -> {:?}: {}", source, destination, e))
            })?;
            fs::write(&destination, rendered)?;
        }
        Err(raw) => {
            debug!("Copying non-text template {:?} verbatim", source);
            fs::write(&destination, raw.into_bytes())?;
        }
    }

    Ok(destination)
}

/// Render every file under `source` into the same layout under
/// `destination`.
///
/// Directories are created as needed; entry names containing tokens are
/// rendered. With `force` off, destination files that already exist are
/// skipped.
pub fn render_dir(
    engine: &TemplateEngine,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    context: &impl Serialize,
    options: RenderOptions,
) -> Result<RenderReport> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    let mut report = RenderReport::default();
    render_dir_into(engine, source, destination, context, options, &mut report)?;
    Ok(report)
}

fn render_dir_into(
    engine: &TemplateEngine,
    source: &Path,
    destination: &Path,
    context: &impl Serialize,
    options: RenderOptions,
    report: &mut RenderReport,
) -> Result<()> {
    ensure_dir(destination)?;

    let mut entries: Vec<(OsString, PathBuf)> = fs::read_dir(source)?
        .map(|entry| entry.map(|e| (e.file_name(), e.path())))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    for (name, path) in entries {
        let target = destination.join(&name);

        if path.is_dir() {
            let target = render_name(engine, &target, context)?;
            render_dir_into(engine, &path, &target, context, options, report)?;
            continue;
        }

        let rendered_target = render_name(engine, &target, context)?;
        if file_exists(&rendered_target) && !options.force {
            info!("Skipping existing file: {}", rendered_target.display());
            report.skipped.push(rendered_target);
            continue;
        }

        report.written.push(render_file(engine, &path, &rendered_target, context)?);
    }

    Ok(())
}

// Render tokens in the last component of `path`.
fn render_name(engine: &TemplateEngine, path: &Path, context: &impl Serialize) -> Result<PathBuf> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(path.to_path_buf());
    };
    if !TemplateEngine::has_tokens(name) {
        return Ok(path.to_path_buf());
    }

    let rendered = engine.render(name, context)?;
    if rendered.is_empty() || rendered.contains(['/', '\\']) {
        return Err(IdegenError::Template(format!(
            "File name template '{}' rendered to unusable name '{}'",
            name, rendered
        )));
    }
    Ok(path.with_file_name(rendered))
}
