//! Stub templates for generated records.

use std::path::Path;

use crate::error::Result;
use crate::error::util::safe_read_to_string;

/// Built-in stub for a new record
pub const DEFAULT_STUB: &str = r"//! `{{ module }}::{{ class }}`

use dto_kit::{Record, Slot};

#[derive(Debug, Clone, Default, Record)]
pub struct {{ class }} {
    pub name: Slot<String>,
}
";

/// Renders a stub with named placeholders
pub trait TemplateRenderer {
    /// Render the template, replacing `{{ key }}` with each value
    fn render(&self, vars: &[(&str, &str)]) -> Result<String>;
}

/// String-replacement renderer over a stub
#[derive(Debug, Clone)]
pub struct StubRenderer {
    stub: String,
}

impl StubRenderer {
    /// Use `stub` as the template
    pub fn new(stub: impl Into<String>) -> Self {
        Self { stub: stub.into() }
    }

    /// Load the template from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        safe_read_to_string(path, "record stub").map(Self::new)
    }
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_STUB)
    }
}

impl TemplateRenderer for StubRenderer {
    fn render(&self, vars: &[(&str, &str)]) -> Result<String> {
        Ok(vars.iter().fold(self.stub.clone(), |content, (key, value)| {
            content.replace(&format!("{{{{ {key} }}}}"), value)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_stub() {
        let rendered = StubRenderer::default()
            .render(&[("module", "crate::dtos"), ("class", "ImageDto")])
            .unwrap();
        assert!(rendered.starts_with("//! `crate::dtos::ImageDto`"));
        assert!(rendered.contains("pub struct ImageDto {"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let rendered = StubRenderer::new("{{ class }} {{ other }}")
            .render(&[("class", "Image")])
            .unwrap();
        assert_eq!(rendered, "Image {{ other }}");
    }

    #[test]
    fn test_from_missing_file() {
        assert!(StubRenderer::from_file(Path::new("/no/such/stub.rs")).is_err());
    }
}
