//! MiniJinja-based template implementation

use crate::{PromptError, Result};
use minijinja::Environment;

/// A named prompt template backed by MiniJinja.
///
/// Uses standard Jinja2 syntax: variables as `{{ variable }}`, conditionals
/// as `{% if %}...{% endif %}`, loops as `{% for %}...{% endfor %}`.
/// Rendering is deterministic: the same source and context always produce
/// the same string.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    /// Create a template from a name and Jinja source.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The template name (used in error reporting).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &serde_json::Value) -> Result<String> {
        // A fresh environment per render avoids borrowing the source for
        // longer than the call.
        let mut env = Environment::new();
        env.add_template(&self.name, &self.source)
            .map_err(|e| PromptError::Compile {
                name: self.name.clone(),
                detail: e.to_string(),
            })?;

        let template = env.get_template(&self.name).map_err(|e| PromptError::Compile {
            name: self.name.clone(),
            detail: e.to_string(),
        })?;

        template.render(context).map_err(|e| PromptError::Render {
            name: self.name.clone(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_interpolates_variables() {
        let template = Template::new("greeting", "Hello, {{ name }}!");
        let rendered = template.render(&json!({ "name": "World" })).unwrap();
        assert_eq!(rendered, "Hello, World!");
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = Template::new("pair", "{{ currency }} from {{ start }} to {{ end }}");
        let context = json!({ "currency": "USDINR", "start": "2024-01-01", "end": "2024-02-01" });
        assert_eq!(
            template.render(&context).unwrap(),
            template.render(&context).unwrap()
        );
    }

    #[test]
    fn test_compile_error_is_classified() {
        let template = Template::new("broken", "{% if x %}no endif");
        let err = template.render(&json!({})).unwrap_err();
        assert!(matches!(err, PromptError::Compile { .. }));
    }
}
