//! Template pack compiled into the binary.
//!
//! The manifest and every asset under `templates/embrygo/` are embedded with
//! `include_str!`, so the default generator needs nothing on disk.

use tracing::{debug, instrument};

use embrygen_core::{
    application::ports::TemplateStore,
    domain::{DomainError, TemplateSet, TemplateSource},
    error::EmbrygenResult,
};

use super::manifest::TemplateManifest;

const MANIFEST: &str = include_str!("../../templates/embrygo/template.toml");

/// `(source, body)` for every embedded asset.
const ASSETS: &[(&str, &str)] = &[
    ("air.toml", include_str!("../../templates/embrygo/files/air.toml")),
    ("env.example", include_str!("../../templates/embrygo/files/env.example")),
    ("gitignore", include_str!("../../templates/embrygo/files/gitignore")),
    ("Makefile", include_str!("../../templates/embrygo/files/Makefile")),
    ("README.md", include_str!("../../templates/embrygo/files/README.md")),
    ("cmd/app/main.go", include_str!("../../templates/embrygo/files/cmd/app/main.go")),
    (
        "internal/config/config.go",
        include_str!("../../templates/embrygo/files/internal/config/config.go"),
    ),
    (
        "internal/database/database.go",
        include_str!("../../templates/embrygo/files/internal/database/database.go"),
    ),
    (
        "internal/handlers/api/handler.go",
        include_str!("../../templates/embrygo/files/internal/handlers/api/handler.go"),
    ),
    (
        "internal/handlers/web/handler.go",
        include_str!("../../templates/embrygo/files/internal/handlers/web/handler.go"),
    ),
    (
        "internal/middleware/middleware.go",
        include_str!("../../templates/embrygo/files/internal/middleware/middleware.go"),
    ),
    (
        "internal/models/common.go",
        include_str!("../../templates/embrygo/files/internal/models/common.go"),
    ),
    (
        "internal/router/router.go",
        include_str!("../../templates/embrygo/files/internal/router/router.go"),
    ),
    (
        "internal/services/welcome/service.go",
        include_str!("../../templates/embrygo/files/internal/services/welcome/service.go"),
    ),
    (
        "internal/services/welcome/model.go",
        include_str!("../../templates/embrygo/files/internal/services/welcome/model.go"),
    ),
    (
        "internal/services/welcome/repository.go",
        include_str!("../../templates/embrygo/files/internal/services/welcome/repository.go"),
    ),
    (
        "pkg/helpers/helpers.go",
        include_str!("../../templates/embrygo/files/pkg/helpers/helpers.go"),
    ),
    (
        "pkg/translations/translations.go",
        include_str!("../../templates/embrygo/files/pkg/translations/translations.go"),
    ),
    (
        "tools/requirements.txt",
        include_str!("../../templates/embrygo/files/tools/requirements.txt"),
    ),
    ("tools/input.css", include_str!("../../templates/embrygo/files/tools/input.css")),
    ("tools/package.json", include_str!("../../templates/embrygo/files/tools/package.json")),
    (
        "tools/tailwind.config.js",
        include_str!("../../templates/embrygo/files/tools/tailwind.config.js"),
    ),
    (
        "webroot/sources/app.js",
        include_str!("../../templates/embrygo/files/webroot/sources/app.js"),
    ),
    (
        "webroot/statics/favicon.ico",
        include_str!("../../templates/embrygo/files/webroot/statics/favicon.ico"),
    ),
    (
        "webroot/statics/htmx.min.js",
        include_str!("../../templates/embrygo/files/webroot/statics/htmx.min.js"),
    ),
    (
        "webroot/views/components/heroicons/heroicons.templ",
        include_str!("../../templates/embrygo/files/webroot/views/components/heroicons/heroicons.templ"),
    ),
    (
        "webroot/views/layouts/base.templ",
        include_str!("../../templates/embrygo/files/webroot/views/layouts/base.templ"),
    ),
    (
        "webroot/views/pages/welcome.templ",
        include_str!("../../templates/embrygo/files/webroot/views/pages/welcome.templ"),
    ),
    ("go.mod", include_str!("../../templates/embrygo/files/go.mod")),
    ("go.sum", include_str!("../../templates/embrygo/files/go.sum")),
];

/// The built-in EmbryGo pack.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Body of one embedded asset by its source path.
    pub fn asset(source: &str) -> Option<&'static str> {
        ASSETS
            .iter()
            .find(|(name, _)| *name == source)
            .map(|(_, body)| *body)
    }

    /// Raw manifest text.
    pub fn manifest() -> &'static str {
        MANIFEST
    }
}

impl TemplateStore for EmbeddedTemplates {
    #[instrument(skip(self))]
    fn load(&self) -> EmbrygenResult<TemplateSet> {
        let manifest = TemplateManifest::parse(MANIFEST, "built-in template.toml")?;
        let set = manifest.into_template_set(|source| {
            Self::asset(source)
                .map(TemplateSource::Static)
                .ok_or_else(|| {
                    DomainError::InvalidTemplate(format!("built-in asset '{source}' is missing"))
                })
        })?;

        debug!(template = %set, files = set.file_count(), "loaded built-in templates");
        Ok(set)
    }
}
