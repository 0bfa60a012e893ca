//! Infrastructure adapters for embrygen.
//!
//! This crate implements the ports defined in `embrygen_core::application::ports`.
//! It contains the filesystem access, the template packs and the renderer.

pub mod confirm;
pub mod filesystem;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use confirm::FixedConfirmation;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use templates::{EmbeddedTemplates, FilesystemTemplateLoader};
