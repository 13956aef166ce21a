//! Generate IDE project files.

use crate::ui::progress;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use idegen_core::config::IdegenConfig;
use idegen_core::util::data::{deep_merge, load_yaml_file};
use idegen_core::util::fs::normalize_path;
use idegen_template::RenderOptions;
use idegen_types::ProjectName;
use idegen_webstorm::WebStormContext;
use serde_json::{json, Value};
use std::path::Path;

pub async fn execute(
    config: &IdegenConfig,
    destination: &Path,
    name: Option<&str>,
    context_file: Option<&Path>,
    force: bool,
) -> Result<()> {
    let from_file = match context_file {
        Some(path) => load_yaml_file(path).with_context(|| format!("Failed to read context {:?}", path))?,
        None => Value::Null,
    };
    let directory = normalize_path(std::env::current_dir()?.join(destination));
    let overrides = context_overrides(&directory, name, from_file)?;
    let context = WebStormContext::create(&overrides)?;

    println!("{} WebStorm project: {}", "Creating".green().bold(), context.project_name.to_string().cyan());

    let adapter = super::webstorm(config)?;
    println!("  Templates: {}", adapter.template_dir().display());
    let spinner = progress::spinner("Rendering project files...");
    let report = adapter.create_project_with(destination, &context, RenderOptions { force });
    spinner.finish_and_clear();
    let report = report.context("Failed to create project")?;

    for path in &report.written {
        println!("  {} {}", "+".green(), path.display());
    }
    for path in &report.skipped {
        println!("  {} {} (kept)", "=".yellow(), path.display());
    }

    println!("{} Project created at {}", "✓".green().bold(), destination.join(".idea").display());
    println!();
    println!("Next steps:");
    println!("  Open it: {}", format!("idegen open {}", destination.display()).cyan());

    Ok(())
}

// Project name precedence: `--name`, then the context file, then the directory name.
fn context_overrides(directory: &Path, name: Option<&str>, from_file: Value) -> Result<Value> {
    let name = match name {
        Some(name) => Some(ProjectName::new(name).context("Invalid project name")?),
        None => None,
    };

    let mut overrides = match from_file {
        Value::Null => json!({}),
        Value::Object(_) => from_file,
        other => bail!("Context file must contain a mapping, got: {}", other),
    };
    if let Some(name) = name {
        overrides = deep_merge(overrides, json!({ "projectName": name.as_str() }));
    } else if overrides.get("projectName").is_none() {
        let derived = ProjectName::from_path(directory).context("Invalid project name")?;
        overrides = deep_merge(overrides, json!({ "projectName": derived.as_str() }));
    }

    Ok(overrides)
}
