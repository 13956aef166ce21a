//! Template context for WebStorm projects.

use idegen_core::util::data::deep_merge;
use idegen_types::{IdegenError, ProjectName, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content root of the project module and the folders excluded from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPath {
    /// Root URL, e.g. `file://$MODULE_DIR$`
    pub content: String,
    /// Excluded folder URLs
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl Default for ContentPath {
    fn default() -> Self {
        Self {
            content: "file://$MODULE_DIR$".to_string(),
            excluded: Vec::new(),
        }
    }
}

/// Values substituted into the project templates.
///
/// Field names serialize in camelCase, which is how templates refer to
/// them (`{{projectName}}`, `{{#each contentPaths}}`). Every field has a
/// default so templates never see an undefined token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebStormContext {
    /// Project and module name
    pub project_name: ProjectName,
    /// JSHint configuration file, relative to the project
    pub jshint_path: String,
    /// Port of the JavaScript debugger
    pub js_debug_port: String,
    /// JavaScript language level
    pub javascript_version: String,
    /// Folder shown as the project root
    pub project_folder: String,
    /// Run configuration selected on open
    pub selected_debug_name: String,
    /// Resource root URLs
    pub resource_roots: Vec<String>,
    /// File watcher tasks to suppress
    pub watcher_suppressed_tasks: Vec<String>,
    /// URLs of files marked as plain text
    pub plain_text: Vec<String>,
    /// Module content roots
    pub content_paths: Vec<ContentPath>,
    /// Project pane state
    pub project_pane: Vec<Value>,
    /// JavaScript libraries
    pub libraries: Vec<Value>,
    /// VCS directory mappings (`directory`, `vcs`)
    pub vcs: Vec<Value>,
    /// JavaScript debug run configurations
    pub js_debug_configuration: Vec<Value>,
    /// Node.js debug run configurations
    pub nodejs_debug_configuration: Vec<Value>,
}

impl Default for WebStormContext {
    fn default() -> Self {
        Self {
            project_name: ProjectName::default(),
            jshint_path: "./.jshintrc".to_string(),
            js_debug_port: "63343".to_string(),
            javascript_version: "ES5".to_string(),
            project_folder: String::new(),
            selected_debug_name: String::new(),
            resource_roots: Vec::new(),
            watcher_suppressed_tasks: Vec::new(),
            plain_text: Vec::new(),
            content_paths: vec![ContentPath::default()],
            project_pane: Vec::new(),
            libraries: Vec::new(),
            vcs: Vec::new(),
            js_debug_configuration: Vec::new(),
            nodejs_debug_configuration: Vec::new(),
        }
    }
}

impl WebStormContext {
    /// Build a context by merging `overrides` over the defaults.
    ///
    /// Nested objects merge key by key; lists in `overrides` replace the
    /// default list. A null override means "no overrides".
    pub fn create(overrides: &Value) -> Result<Self> {
        let defaults = serde_json::to_value(Self::default())?;
        let merged = match overrides {
            Value::Null => defaults,
            Value::Object(_) => deep_merge(defaults, overrides.clone()),
            other => {
                return Err(IdegenError::InvalidArgument(format!(
                    "Project context must be a mapping, got: {}",
                    other
                )))
            }
        };

        serde_json::from_value(merged)
            .map_err(|e| IdegenError::InvalidArgument(format!("Invalid project context: {}", e)))
    }

    /// Shortcut for the values most projects set.
    pub fn for_project(
        project_name: ProjectName,
        content_paths: Vec<ContentPath>,
        js_debug_port: impl Into<String>,
        jshint_path: impl Into<String>,
    ) -> Self {
        Self {
            project_name,
            content_paths,
            js_debug_port: js_debug_port.into(),
            jshint_path: jshint_path.into(),
            ..Self::default()
        }
    }
}
