//! Mustache-style renderer for deferred-render files.
//!
//! Backed by handlebars, whose `{{field}}` syntax is mustache-compatible.
//! Strict mode stays off so placeholders without a matching configuration
//! field render empty instead of failing the merge.

use handlebars::Handlebars;

use graft_core::{
    application::ports::TemplateRenderer,
    domain::ProjectConfiguration,
    error::GraftResult,
};

/// Renderer expanding deferred-render templates against the target
/// project's configuration.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: &str, config: &ProjectConfiguration) -> GraftResult<String> {
        let data = serde_json::to_value(config).map_err(|e| rendering_failed(e.to_string()))?;
        self.registry
            .render_template(template, &data)
            .map_err(|e| rendering_failed(e.to_string()))
    }
}

fn rendering_failed(reason: String) -> graft_core::error::GraftError {
    graft_core::application::ApplicationError::RenderingFailed { reason }.into()
}
