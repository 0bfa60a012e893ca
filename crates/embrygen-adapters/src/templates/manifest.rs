//! `template.toml` manifest format.
//!
//! ```toml
//! [template]
//! id      = "embrygo"
//! version = "1.0.0"
//!
//! [metadata]
//! name        = "EmbryGo"
//! description = "Go & Templ web starter"   # optional
//!
//! [[files]]
//! source = "air.toml"          # asset under files/
//! target = ".air.toml"         # path in the generated project; defaults to source
//!
//! [[files]]
//! source = "cmd/app/main.go"
//! target = "cmd/{{APP_NAME}}/main.go"
//! ```

use serde::Deserialize;

use embrygen_core::domain::{
    DomainError, FileEntry, RelativePath, TemplateMetadata, TemplateSet, TemplateSource,
};

/// Deserialised representation of a `template.toml` file.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateManifest {
    pub template: TemplateSection,
    pub metadata: MetadataSection,
    #[serde(default)]
    pub files: Vec<ManifestFile>,
}

/// `[template]` section: identity of the pack.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSection {
    pub id: String,
    pub version: String,
}

/// `[metadata]` section: human-facing information.
#[derive(Debug, Deserialize, Clone)]
pub struct MetadataSection {
    pub name: String,
    pub description: Option<String>,
}

/// One entry under `[[files]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct ManifestFile {
    /// Asset path relative to the pack's `files/` directory.
    pub source: String,
    /// Target path pattern; the source path when omitted.
    pub target: Option<String>,
}

impl ManifestFile {
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.source)
    }
}

impl TemplateManifest {
    /// Parse manifest text. `origin` names the file in error messages.
    pub fn parse(raw: &str, origin: &str) -> Result<Self, DomainError> {
        let manifest: Self = toml::from_str(raw)
            .map_err(|e| DomainError::InvalidTemplate(format!("failed to parse '{origin}': {e}")))?;

        for file in &manifest.files {
            if file.source.trim().is_empty() {
                return Err(DomainError::InvalidTemplate(format!(
                    "'{origin}' has a [[files]] entry with an empty source"
                )));
            }
            // Assets must stay inside the pack's files/ directory.
            RelativePath::try_new(normalize_path(&file.source)).map_err(|e| {
                DomainError::InvalidTemplate(format!(
                    "'{origin}' source '{}' is not a pack-relative path: {e}",
                    file.source
                ))
            })?;
        }
        Ok(manifest)
    }

    /// Normalised `source` paths, in manifest order.
    pub fn sources(&self) -> impl Iterator<Item = String> + '_ {
        self.files.iter().map(|f| normalize_path(&f.source))
    }

    /// Build a [`TemplateSet`], asking `body` for each asset's contents.
    pub fn into_template_set<F>(self, mut body: F) -> Result<TemplateSet, DomainError>
    where
        F: FnMut(&str) -> Result<TemplateSource, DomainError>,
    {
        let metadata = TemplateMetadata::new(self.metadata.name)
            .description(self.metadata.description.unwrap_or_default());

        let mut set =
            TemplateSet::new(self.template.id, self.template.version).with_metadata(metadata);

        for file in &self.files {
            let source = normalize_path(&file.source);
            set = set.with_file(FileEntry::new(file.target(), body(&source)?));
        }

        Ok(set)
    }
}

/// Forward slashes, no leading `./`.
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    path.strip_prefix("./").unwrap_or(&path).to_string()
}
