//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `embrygen-adapters` crate provides implementations; the CLI provides
//! the interactive ones.

use std::path::Path;

use crate::domain::{FileEntry, RenderContext, RenderedFile, TemplateSet};
use crate::error::EmbrygenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `embrygen_adapters::filesystem::LocalFilesystem` (production)
/// - `embrygen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EmbrygenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> EmbrygenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> EmbrygenResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> EmbrygenResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `embrygen_adapters::templates::EmbeddedTemplates` (built into the binary)
/// - `embrygen_adapters::templates::FilesystemTemplateLoader` (a pack on disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the template set to generate from.
    fn load(&self) -> EmbrygenResult<TemplateSet>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `embrygen_adapters::renderer::SimpleRenderer` (flat marker substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one file entry (target path and body) with `context`.
    fn render(&self, entry: &FileEntry, context: &RenderContext) -> EmbrygenResult<RenderedFile>;
}

/// Port for the yes/no decision that gates destructive removal.
///
/// Implemented by:
/// - `embrygen_adapters::confirm::FixedConfirmation` (non-interactive)
/// - the CLI's stdin prompt
#[cfg_attr(test, mockall::automock)]
pub trait Confirmation: Send + Sync {
    /// Ask `prompt`; `Ok(true)` only on an explicit affirmative.
    fn confirm(&self, prompt: &str) -> EmbrygenResult<bool>;
}

/// Progress notifications from a scaffold run.
///
/// Every method defaults to a no-op so observers implement only what they
/// display.
pub trait ScaffoldObserver: Send + Sync {
    fn root_removed(&self, _path: &Path) {}

    fn directory_created(&self, _path: &Path) {}

    fn file_created(&self, _path: &Path) {}

    fn placeholder_removed(&self, _path: &Path) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}
