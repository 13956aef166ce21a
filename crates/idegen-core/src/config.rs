//! Configuration management for idegen.
//!
//! This module provides multi-layer configuration support with:
//! - File-based configuration (YAML)
//! - Environment variable overrides
//! - Programmatic updates
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`IDEGEN_` prefix, `__` between key segments)
//! 2. Programmatically set values
//! 3. Values loaded from file
//! 4. Default values
//!
//! ## Example
//!
//! ```no_run
//! use idegen_core::config::{Config, IdegenConfig};
//!
//! # fn main() -> idegen_core::Result<()> {
//! // Load the typed configuration from ~/.idegen/config
//! let config = IdegenConfig::load()?;
//! println!("{:?}", config.malformed_versions);
//!
//! // Or work with raw layered values
//! let mut raw = Config::load("/tmp/idegen.yml")?;
//! raw.set("webstorm.settings_name", "WebStorm2021.1")?;
//! raw.save()?;
//! # Ok(())
//! # }
//! ```

use idegen_types::{ConflictPolicy, IdegenError, MalformedVersionPolicy, Result};
use idegen_types::config::{LogConfig, WebStormSettings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::fs;
use tracing::{debug, trace};

/// Prefix of environment variables read into the environment layer.
pub const ENV_PREFIX: &str = "IDEGEN_";

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values set programmatically
    Set = 2,
    /// Values from environment variables
    Environment = 3,
}

const LOW_TO_HIGH: [ConfigLayer; 4] = [
    ConfigLayer::Default,
    ConfigLayer::Loaded,
    ConfigLayer::Set,
    ConfigLayer::Environment,
];

/// Main configuration structure with multi-layer support.
///
/// This is the low-level configuration type. For the typed view, see
/// `IdegenConfig`.
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration from a file path.
    ///
    /// If the file doesn't exist, an empty configuration is created.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut layers = HashMap::new();

        if path.exists() {
            debug!("Loading configuration from {:?}", path);
            let content = fs::read_to_string(path)
                .map_err(|e| IdegenError::Config(format!("Failed to read config file: {}", e)))?;

            let value: Value = serde_yaml::from_str(&content)
                .map_err(|e| IdegenError::Config(format!("Failed to parse config: {}", e)))?;

            // An empty file parses as null
            if !value.is_null() {
                layers.insert(ConfigLayer::Loaded, value);
            }
        }

        Ok(Self {
            layers,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Install the default layer.
    pub fn with_defaults(mut self, defaults: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(defaults)
            .map_err(|e| IdegenError::Config(format!("Failed to serialize defaults: {}", e)))?;
        self.layers.insert(ConfigLayer::Default, value);
        Ok(self)
    }

    /// Populate the environment layer from the process environment.
    pub fn with_env(self, prefix: &str) -> Result<Self> {
        self.with_env_vars(prefix, std::env::vars())
    }

    /// Populate the environment layer from the given variables.
    ///
    /// `PREFIX_WEBSTORM__EXECUTABLE=/x` becomes `webstorm.executable: /x`.
    /// Values starting with `[` or `{` are parsed as YAML flow collections;
    /// everything else stays a string, so `2020.3` is never read as a number.
    pub fn with_env_vars<I>(mut self, prefix: &str, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut layer = Value::Object(Default::default());

        for (name, raw) in vars {
            let Some(stripped) = name.strip_prefix(prefix) else {
                continue;
            };
            if stripped.is_empty() {
                continue;
            }

            let key = stripped
                .split("__")
                .map(|part| part.to_lowercase())
                .collect::<Vec<_>>()
                .join(".");
            let value = env_value(raw);

            trace!("Environment override {} -> {}", name, key);
            Self::set_value_at_path_impl(&mut layer, &key, value)?;
        }

        if layer.as_object().map_or(false, |m| !m.is_empty()) {
            self.layers.insert(ConfigLayer::Environment, layer);
        }

        Ok(self)
    }

    /// Get a configuration value by key, respecting layer priority.
    ///
    /// Returns None if the key doesn't exist in any layer.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        for layer in LOW_TO_HIGH.iter().rev() {
            if let Some(layer_data) = self.layers.get(layer) {
                if let Some(value) = Self::get_value_at_path(layer_data, key) {
                    if let Ok(typed_value) = serde_json::from_value(value.clone()) {
                        return Some(typed_value);
                    }
                }
            }
        }

        None
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| IdegenError::Config(format!("Failed to serialize value: {}", e)))?;

        let set_layer = self.layers.entry(ConfigLayer::Set).or_insert(Value::Object(Default::default()));

        Self::set_value_at_path_impl(set_layer, key, value)
    }

    /// Save configuration to file.
    ///
    /// The environment layer is not persisted.
    pub fn save(&self) -> Result<()> {
        let path = self.file_path.as_ref().ok_or_else(|| {
            IdegenError::Config("Cannot save: no file path set".to_string())
        })?;

        let mut merged = Value::Object(Default::default());
        for layer in LOW_TO_HIGH.iter().filter(|l| **l != ConfigLayer::Environment) {
            if let Some(layer_data) = self.layers.get(layer) {
                merged = crate::util::data::deep_merge(merged, layer_data.clone());
            }
        }

        let yaml = serde_yaml::to_string(&merged)
            .map_err(|e| IdegenError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml)
            .map_err(|e| IdegenError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get merged data from all layers.
    pub fn merged_data(&self) -> Value {
        let mut merged = Value::Object(serde_json::Map::new());

        for layer in &LOW_TO_HIGH {
            if let Some(layer_data) = self.layers.get(layer) {
                merged = crate::util::data::deep_merge(merged, layer_data.clone());
            }
        }

        merged
    }

    // Helper: Get value at dotted path
    fn get_value_at_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
        let mut current = data;

        for part in path.split('.') {
            current = current.get(part)?;
        }

        Some(current)
    }

    // Helper: Set value at dotted path
    fn set_value_at_path_impl(data: &mut Value, path: &str, value: Value) -> Result<()> {
        let parts: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            return Err(IdegenError::Config("Empty path".to_string()));
        };
        if last.is_empty() {
            return Err(IdegenError::Config(format!("Invalid config key: '{}'", path)));
        }

        // Navigate to parent, creating intermediate objects as needed
        let mut current = data;
        for part in parents {
            if !current.is_object() {
                *current = Value::Object(Default::default());
            }
            let Value::Object(map) = current else {
                idegen_types::bug!("config node is not an object after reset");
            };
            current = map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        }

        if !current.is_object() {
            *current = Value::Object(Default::default());
        }
        if let Value::Object(map) = current {
            map.insert(last.to_string(), value);
        }

        Ok(())
    }
}

/// User configuration (~/.idegen/config).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdegenConfig {
    /// Ranking of install directories without a trailing version number
    #[serde(default)]
    pub malformed_versions: MalformedVersionPolicy,

    /// Handling of existing files when copying preferences
    #[serde(default)]
    pub conflicts: ConflictPolicy,

    /// Logging output
    #[serde(default)]
    pub log: LogConfig,

    /// WebStorm overrides
    #[serde(default)]
    pub webstorm: WebStormSettings,
}

impl IdegenConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load configuration from a specific path, applying `IDEGEN_*`
    /// environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::load(path)?.with_env(ENV_PREFIX)?;
        Self::from_layers(&config)
    }

    /// Build the typed view from a layered configuration.
    pub fn from_layers(config: &Config) -> Result<Self> {
        serde_json::from_value(config.merged_data())
            .map_err(|e| IdegenError::Config(format!("Failed to parse idegen config: {}", e)))
    }

    /// Get the default path for the configuration file.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".idegen")
            .join("config")
    }
}

// Scalar env values stay strings; flow collections become lists or maps.
fn env_value(raw: String) -> Value {
    let opening = raw.trim_start().chars().next();
    match opening {
        Some('[') | Some('{') => serde_yaml::from_str::<Value>(&raw).unwrap_or(Value::String(raw)),
        _ => Value::String(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idegen_types::LogLevel;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_config_layers() {
        let mut config = Config::default();

        config.layers.insert(
            ConfigLayer::Default,
            serde_json::json!({"key": "default_value"}),
        );
        config.layers.insert(
            ConfigLayer::Loaded,
            serde_json::json!({"key": "loaded_value"}),
        );

        let value: String = config.get("key").unwrap();
        assert_eq!(value, "loaded_value");
    }

    #[test]
    fn test_env_layer_wins() {
        let mut config = Config::default()
            .with_env_vars(ENV_PREFIX, vars(&[
                ("IDEGEN_WEBSTORM__SETTINGS_NAME", "WebStorm2020.3"),
                ("IDEGEN_MALFORMED_VERSIONS", "last"),
                ("HOME", "/ignored"),
            ]))
            .unwrap();
        config.set("webstorm.settings_name", "WebStorm9").unwrap();

        let name: String = config.get("webstorm.settings_name").unwrap();
        assert_eq!(name, "WebStorm2020.3");
        assert!(config.get::<String>("home").is_none());

        let typed = IdegenConfig::from_layers(&config).unwrap();
        assert_eq!(typed.malformed_versions, MalformedVersionPolicy::Last);
    }

    #[test]
    fn test_env_values_parse_as_yaml() {
        let config = Config::default()
            .with_env_vars(ENV_PREFIX, vars(&[
                ("IDEGEN_WEBSTORM__INSTALL_ROOTS", "[/opt, /usr/local]"),
            ]))
            .unwrap();

        let roots: Vec<PathBuf> = config.get("webstorm.install_roots").unwrap();
        assert_eq!(roots, vec![PathBuf::from("/opt"), PathBuf::from("/usr/local")]);
    }

    #[test]
    fn test_env_scalars_stay_strings() {
        let config = Config::default()
            .with_env_vars(ENV_PREFIX, vars(&[
                ("IDEGEN_WEBSTORM__SETTINGS_NAME", "2020.3"),
                ("IDEGEN_WEBSTORM__EXECUTABLE_NAME", "true"),
            ]))
            .unwrap();

        let typed = IdegenConfig::from_layers(&config).unwrap();
        assert_eq!(typed.webstorm.settings_name.as_deref(), Some("2020.3"));
        assert_eq!(typed.webstorm.executable_name.as_deref(), Some("true"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = Config::default()
            .with_env_vars(ENV_PREFIX, vars(&[("IDEGEN_LOG__LEVEL", "debug")]))
            .unwrap();
        assert_eq!(IdegenConfig::from_layers(&config).unwrap().log.level, LogLevel::Debug);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        fs::write(&path, "log:\n  level: Warn\n  format: json\n").unwrap();
        let typed = IdegenConfig::from_layers(&Config::load(&path).unwrap()).unwrap();
        assert_eq!(typed.log.level, LogLevel::Warn);
    }

    #[test]
    fn test_load_save_roundtrip_keeps_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config");

        let mut config = Config::load(&path).unwrap();
        config.set("conflicts", "skip").unwrap();
        config.save().unwrap();

        let typed = IdegenConfig::from_layers(&Config::load(&path).unwrap()).unwrap();
        assert_eq!(typed.conflicts, ConflictPolicy::Skip);
        assert_eq!(typed.malformed_versions, MalformedVersionPolicy::First);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join("absent")).unwrap();
        let typed = IdegenConfig::from_layers(&config).unwrap();

        assert_eq!(typed.conflicts, ConflictPolicy::Prompt);
        assert!(typed.webstorm.executable.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        fs::write(&path, "webstorm: [unclosed").unwrap();

        assert!(matches!(Config::load(&path), Err(IdegenError::Config(_))));
    }
}
