//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use idegen_core::config::IdegenConfig;
use idegen_types::{ConflictPolicy, IdeKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idegen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "IDE project generator and install locator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ~/.idegen/config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the installed IDE executable
    Locate {
        /// IDE to look for
        #[arg(long, default_value = "webstorm")]
        ide: IdeKind,
    },

    /// Resolve a path whose directories carry unknown versions
    Resolve {
        /// Directory to start from
        base: PathBuf,

        /// Path segments; prefix a segment with `re:` to match it as a pattern
        #[arg(required = true)]
        segments: Vec<String>,
    },

    /// List directories below a base that contain a file
    Scan {
        /// Directory to search
        base: PathBuf,

        /// File name to look for
        file_name: String,
    },

    /// Generate IDE project files
    New {
        /// Project directory
        destination: PathBuf,

        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// YAML file with template context overrides
        #[arg(long)]
        context: Option<PathBuf>,

        /// Keep existing project files
        #[arg(long)]
        no_force: bool,
    },

    /// Install external tools and file templates into the IDE settings
    Prefs {
        /// Install external tools
        #[arg(long)]
        tools: bool,

        /// Install file templates
        #[arg(long)]
        file_templates: bool,

        /// What to do with existing files that differ
        #[arg(long)]
        policy: Option<ConflictPolicy>,
    },

    /// Open a project in the IDE
    Open {
        /// Project directory or file
        location: PathBuf,
    },

    /// Show version information
    Version {
        /// Show build details
        #[arg(long)]
        detailed: bool,
    },
}

impl Cli {
    pub async fn execute(&self, config: IdegenConfig) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Locate { ide } => locate::execute(&config, *ide).await,
            Commands::Resolve { base, segments } => resolve::execute(&config, base, segments).await,
            Commands::Scan { base, file_name } => scan::execute(base, file_name).await,
            Commands::New { destination, name, context, no_force } => {
                new::execute(&config, destination, name.as_deref(), context.as_deref(), !no_force).await
            }
            Commands::Prefs { tools, file_templates, policy } => {
                prefs::execute(&config, *tools, *file_templates, *policy).await
            }
            Commands::Open { location } => open::execute(&config, location).await,
            Commands::Version { detailed } => version::execute(*detailed).await,
        }
    }
}
