//! Simple variable substitution renderer.

use embrygen_core::{
    application::ports::TemplateRenderer,
    domain::{FileEntry, RenderContext, RenderedFile},
    error::EmbrygenResult,
};
use tracing::{instrument, trace};

/// Renderer using flat `{{NAME}}` substitution.
///
/// The target path and the body go through the same grammar; the path is
/// then checked to stay relative.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(target = %entry.target))]
    fn render(&self, entry: &FileEntry, context: &RenderContext) -> EmbrygenResult<RenderedFile> {
        let path = context.render_path(&entry.target)?;
        let content = context.render(&entry.target, entry.body.as_str())?;
        trace!(path = %path, bytes = content.len(), "Rendered");
        Ok(RenderedFile { path, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embrygen_core::{
        domain::{DomainError, GenerationSpec},
        error::EmbrygenError,
    };

    fn context(module: &str) -> RenderContext {
        let spec = GenerationSpec::builder()
            .root_name("demo")
            .module_id(module)
            .app_name("svc")
            .build()
            .unwrap();
        RenderContext::from_spec(&spec)
    }

    #[test]
    fn renders_path_and_body() {
        let entry = FileEntry::new(
            "cmd/{{APP_NAME}}/main.go",
            "import \"{{MODULE_ID}}/internal/router\"\n",
        );
        let file = SimpleRenderer::new()
            .render(&entry, &context("example.com/demo"))
            .unwrap();
        assert_eq!(file.path.to_string(), "cmd/svc/main.go");
        assert_eq!(file.content, "import \"example.com/demo/internal/router\"\n");
    }

    #[test]
    fn foreign_braces_survive() {
        let entry = FileEntry::new(
            ".air.toml",
            "cmd = \"templ generate && go build -o ./tmp/{{APP_NAME}}\"\nexclude = \"{{.ChangedFileExt}}\"\n",
        );
        let file = SimpleRenderer::new()
            .render(&entry, &context("example.com/demo"))
            .unwrap();
        assert!(file.content.contains("./tmp/svc"));
        assert!(file.content.contains("{{.ChangedFileExt}}"));
    }

    #[test]
    fn module_change_only_touches_its_occurrences() {
        let body = "module {{MODULE_ID}}\n\n// {{MODULE_ID}} {x}\n";
        let entry = FileEntry::new("go.mod", body);
        let a = SimpleRenderer::new()
            .render(&entry, &context("a.io/x"))
            .unwrap()
            .content;
        let b = SimpleRenderer::new()
            .render(&entry, &context("b.io/x"))
            .unwrap()
            .content;

        assert_eq!(a.replace("a.io/x", "b.io/x"), b);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn unknown_marker_is_an_error() {
        let entry = FileEntry::new("LICENSE", "Copyright {{YEAR}}\n");
        let err = SimpleRenderer::new()
            .render(&entry, &context("example.com/demo"))
            .unwrap_err();
        assert!(matches!(
            err,
            EmbrygenError::Domain(DomainError::UnresolvedMarker { ref marker, .. })
                if marker == "YEAR"
        ));
    }

    #[test]
    fn rendered_path_may_not_escape_root() {
        let entry = FileEntry::new("../{{APP_NAME}}.go", "");
        assert!(
            SimpleRenderer::new()
                .render(&entry, &context("example.com/demo"))
                .is_err()
        );
    }
}
