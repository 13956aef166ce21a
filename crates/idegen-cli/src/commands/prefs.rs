//! Install IDE preferences.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use idegen_core::config::IdegenConfig;
use idegen_core::term::in_controlling_terminal;
use idegen_types::{ConflictAction, ConflictPolicy, IdeAdapter, PreferenceSet};
use std::path::Path;
use tracing::warn;

pub async fn execute(
    config: &IdegenConfig,
    tools: bool,
    file_templates: bool,
    policy: Option<ConflictPolicy>,
) -> Result<()> {
    let mut set = PreferenceSet { tools, file_templates };
    if set.is_empty() {
        set = PreferenceSet::all();
    }

    let mut policy = policy.unwrap_or(config.conflicts);
    if policy == ConflictPolicy::Prompt && !in_controlling_terminal() {
        warn!("Not attached to a terminal; existing preference files will be kept");
        policy = ConflictPolicy::Skip;
    }

    let adapter = super::webstorm(config)?;
    println!(
        "{} preferences into {}",
        "Installing".green().bold(),
        adapter.user_preferences().display().to_string().cyan()
    );

    let written = adapter.copy_preferences(set, &mut |path: &Path| resolve_conflict(policy, path))?;
    println!("{} {} file(s) written", "✓".green().bold(), written);

    Ok(())
}

fn resolve_conflict(policy: ConflictPolicy, path: &Path) -> ConflictAction {
    match policy {
        ConflictPolicy::Overwrite => ConflictAction::Overwrite,
        ConflictPolicy::Skip => ConflictAction::Skip,
        ConflictPolicy::Prompt => {
            let overwrite = Confirm::new()
                .with_prompt(format!("{} differs from the bundled copy. Overwrite?", path.display()))
                .default(false)
                .interact()
                .unwrap_or(false);
            if overwrite {
                ConflictAction::Overwrite
            } else {
                ConflictAction::Skip
            }
        }
    }
}
