//! Template engine seam.
//!
//! The dumper never evaluates templates itself; it hands a template string
//! and a variable map to whatever engine the caller wired in. The trait is
//! the whole contract — the bundled [`MinijinjaEngine`] is a convenience,
//! not a requirement.

use thiserror::Error;

use crate::report::DataContext;

/// A template rendering failure, carrying the engine's own message.
#[derive(Debug, Error)]
#[error("template render failed: {0}")]
pub struct RenderError(pub String);

/// External rendering collaborator.
pub trait TemplateEngine {
    /// Short engine identifier, recorded in the dump context so the
    /// generated runner knows which engine to reload the report with.
    fn kind(&self) -> &str;

    /// Render `template` with `vars` to a string.
    fn render(&self, template: &str, vars: &DataContext) -> Result<String, RenderError>;
}

/// Minijinja-backed engine with strict undefined-variable behavior, so a
/// template referencing a variable the dump context never defines fails
/// loudly instead of rendering an empty hole.
pub struct MinijinjaEngine;

impl MinijinjaEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MinijinjaEngine {
    fn kind(&self) -> &str {
        "minijinja"
    }

    fn render(&self, template: &str, vars: &DataContext) -> Result<String, RenderError> {
        let env = ENV.get_or_init(|| {
            let mut env = minijinja::Environment::new();
            env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
            env
        });
        env.render_str(template, vars)
            .map_err(|err| RenderError(err.to_string()))
    }
}

static ENV: std::sync::OnceLock<minijinja::Environment<'static>> = std::sync::OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> DataContext {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
            .collect()
    }

    #[test]
    fn renders_substitutions() {
        let engine = MinijinjaEngine::new();
        let out = engine
            .render("class {{ name }} {}", &vars(&[("name", "InvoiceMain")]))
            .unwrap();
        assert_eq!(out, "class InvoiceMain {}");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let engine = MinijinjaEngine::new();
        let err = engine.render("{{ missing }}", &DataContext::new());
        assert!(err.is_err());
    }

    #[test]
    fn kind_names_the_engine() {
        assert_eq!(MinijinjaEngine::new().kind(), "minijinja");
    }
}
