//! Handlebars-based template engine.

use handlebars::Handlebars;
use idegen_types::{IdegenError, Result};
use serde::Serialize;
use tracing::trace;

/// Template engine for IDE configuration files.
///
/// Substituted values are written verbatim (no HTML escaping): templates
/// produce XML whose attribute values already carry their own escaping
/// where needed. Unknown tokens render as empty strings.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with the default settings.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(false);
        Self { registry }
    }

    /// Render `template` against `context`.
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String> {
        trace!("Rendering template of {} bytes", template.len());
        self.registry
            .render_template(template, context)
            .map_err(|e| IdegenError::Template(e.to_string()))
    }

    /// Whether `text` contains template tokens worth rendering.
    pub fn has_tokens(text: &str) -> bool {
        text.contains("{{")
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `template` against `context` with a default engine.
pub fn render(template: &str, context: &impl Serialize) -> Result<String> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_tokens_and_blocks() {
        let context = json!({
            "projectName": "shop",
            "contentPaths": [
                {"content": "file://$MODULE_DIR$", "excluded": ["file://$MODULE_DIR$/node_modules"]}
            ]
        });
        let template = "<module name=\"{{projectName}}\">{{#each contentPaths}}<content url=\"{{content}}\">\
            {{#each excluded}}<excludeFolder url=\"{{this}}\"/>{{/each}}</content>{{/each}}</module>";

        let rendered = render(template, &context).unwrap();
        assert_eq!(
            rendered,
            "<module name=\"shop\"><content url=\"file://$MODULE_DIR$\">\
            <excludeFolder url=\"file://$MODULE_DIR$/node_modules\"/></content></module>"
        );
    }

    #[test]
    fn test_render_does_not_escape() {
        let rendered = render("{{path}}", &json!({"path": "a&b <c>"})).unwrap();
        assert_eq!(rendered, "a&b <c>");
    }

    #[test]
    fn test_missing_token_renders_empty() {
        assert_eq!(render("[{{missing}}]", &json!({})).unwrap(), "[]");
    }

    #[test]
    fn test_malformed_template_is_template_error() {
        let result = render("{{#each items}}", &json!({"items": []}));
        assert!(matches!(result, Err(IdegenError::Template(_))));
    }
}
