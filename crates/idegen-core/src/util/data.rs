//! YAML and JSON data handling utilities.

use idegen_types::{IdegenError, Result};
use serde_json::Value;
use std::path::Path;
use std::fs;

/// Load YAML from string.
pub fn load_yaml(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(IdegenError::Yaml)
}

/// Load YAML (or JSON, which is a YAML subset) from file.
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    load_yaml(&content)
}

/// Deep merge two values.
///
/// Objects merge recursively with overlay values taking precedence; any
/// other overlay value (arrays included) replaces the base outright.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}
