//! Logging system for idegen.
//!
//! Installs a `tracing` subscriber with the configured level and format.
//! `RUST_LOG` takes precedence over the configured level.

use idegen_types::config::{LogConfig, LogFormat};
use idegen_types::{IdegenError, LogLevel, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging from configuration.
pub fn init_from_config(config: &LogConfig) -> Result<()> {
    init(config.level, config.format)
}

/// Initialize logging at a level and format.
///
/// Fails if a global subscriber is already installed.
pub fn init(level: LogLevel, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| IdegenError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Filter directive scoping `level` to the idegen crates.
pub fn filter_directive(level: LogLevel) -> String {
    let level = level.as_filter();
    ["idegen", "idegen_core", "idegen_locate", "idegen_template", "idegen_webstorm"]
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_scopes_crates() {
        let directive = filter_directive(LogLevel::Debug);
        assert!(directive.starts_with("idegen=debug"));
        assert!(directive.contains("idegen_locate=debug"));
        assert!(EnvFilter::try_new(&directive).is_ok());
    }
}
