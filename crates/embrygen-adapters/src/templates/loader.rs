//! Filesystem-based template loader.
//!
//! Reads a template pack from disk so a customised copy of the built-in
//! pack can be used without rebuilding.
//!
//! # Directory layout expected
//!
//! ```text
//! my-pack/
//! ├── template.toml        ← manifest (required)
//! └── files/
//!     ├── go.mod
//!     └── cmd/app/main.go
//! ```
//!
//! Every asset the manifest names must exist. Files under `files/` that the
//! manifest does not name are reported with a `WARN` log and ignored.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use embrygen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainError, TemplateSet, TemplateSource},
    error::EmbrygenResult,
};

use super::manifest::{TemplateManifest, normalize_path};

/// Name of the manifest file inside a pack.
pub const MANIFEST_FILE: &str = "template.toml";

/// Directory holding the assets inside a pack.
pub const ASSETS_DIR: &str = "files";

/// Loads a [`TemplateSet`] from a pack directory.
///
/// # Example
///
/// ```no_run
/// use embrygen_adapters::FilesystemTemplateLoader;
/// use embrygen_core::application::ports::TemplateStore;
///
/// let loader = FilesystemTemplateLoader::new("./my-pack");
/// let set = loader.load()?;
/// println!("Loaded {} files", set.file_count());
/// # Ok::<(), embrygen_core::error::EmbrygenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    pack_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `pack_dir`.
    ///
    /// The directory does not need to exist yet; `load` reports it.
    pub fn new(pack_dir: impl Into<PathBuf>) -> Self {
        Self {
            pack_dir: pack_dir.into(),
        }
    }

    pub fn pack_dir(&self) -> &Path {
        &self.pack_dir
    }

    fn read_manifest(&self) -> EmbrygenResult<TemplateManifest> {
        let manifest_path = self.pack_dir.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(ApplicationError::TemplateSourceUnavailable {
                reason: format!("missing {MANIFEST_FILE} in '{}'", self.pack_dir.display()),
            }
            .into());
        }

        let raw = fs::read_to_string(&manifest_path).map_err(|e| {
            ApplicationError::TemplateSourceUnavailable {
                reason: format!("failed to read '{}': {e}", manifest_path.display()),
            }
        })?;

        Ok(TemplateManifest::parse(
            &raw,
            &manifest_path.display().to_string(),
        )?)
    }

    /// Assets present on disk but absent from the manifest.
    fn orphan_assets(&self, declared: &HashSet<String>) -> EmbrygenResult<Vec<String>> {
        let assets_dir = self.pack_dir.join(ASSETS_DIR);
        let mut orphans = Vec::new();

        for walk_entry in WalkDir::new(&assets_dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry
                .map_err(|e| DomainError::InvalidTemplate(format!("directory walk error: {e}")))?;
            if !walk_entry.file_type().is_file() {
                continue;
            }

            let rel = walk_entry.path().strip_prefix(&assets_dir).map_err(|_| {
                DomainError::InvalidTemplate(format!(
                    "failed to relativise '{}' against '{}'",
                    walk_entry.path().display(),
                    assets_dir.display()
                ))
            })?;
            let rel = normalize_path(&rel.to_string_lossy());
            if !declared.contains(&rel) {
                orphans.push(rel);
            }
        }

        Ok(orphans)
    }
}

impl TemplateStore for FilesystemTemplateLoader {
    #[instrument(skip(self), fields(dir = %self.pack_dir.display()))]
    fn load(&self) -> EmbrygenResult<TemplateSet> {
        let manifest = self.read_manifest()?;

        let declared: HashSet<String> = manifest.sources().collect();
        for orphan in self.orphan_assets(&declared)? {
            warn!(asset = %orphan, "asset not listed in {MANIFEST_FILE}; ignoring");
        }

        let assets_dir = self.pack_dir.join(ASSETS_DIR);
        let set = manifest.into_template_set(|source| {
            let path = assets_dir.join(source);
            fs::read_to_string(&path)
                .map(TemplateSource::Owned)
                .map_err(|e| {
                    DomainError::InvalidTemplate(format!(
                        "failed to read asset '{}': {e}",
                        path.display()
                    ))
                })
        })?;

        debug!(template = %set, files = set.file_count(), "loaded template pack");
        Ok(set)
    }
}
